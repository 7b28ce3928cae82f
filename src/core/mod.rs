//! Daybook row model, configuration, errors, and the voucher extraction.
//!
//! [`extract`] is pure: it takes a parsed [`Document`](crate::tally::Document)
//! and returns rows without touching the filesystem.

mod config;
mod error;
mod extract;
mod parse;
mod row;

pub use config::*;
pub use error::*;
pub use extract::*;
pub use parse::*;
pub use row::*;

//! # tally-daybook
//!
//! Converts a Tally ERP XML voucher export into a receipt daybook: one flat
//! row per voucher summary, settled bill, and contra ledger entry, ready for
//! spreadsheet reconciliation.
//!
//! All amounts use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_daybook::{extract, tally, report};
//! use rust_decimal_macros::dec;
//!
//! let xml = r#"<ENVELOPE><VOUCHER>
//!   <VOUCHERTYPENAME>Receipt</VOUCHERTYPENAME>
//!   <DATE>20230415</DATE>
//!   <VOUCHERNUMBER>R-1</VOUCHERNUMBER>
//!   <PARTYLEDGERNAME>Acme</PARTYLEDGERNAME>
//!   <ALLLEDGERENTRIES.LIST>
//!     <LEDGERNAME>Acme</LEDGERNAME><AMOUNT>-500</AMOUNT>
//!     <BILLALLOCATIONS.LIST><NAME>INV-9</NAME><AMOUNT>-500</AMOUNT></BILLALLOCATIONS.LIST>
//!   </ALLLEDGERENTRIES.LIST>
//!   <ALLLEDGERENTRIES.LIST><LEDGERNAME>Cash</LEDGERNAME><AMOUNT>500</AMOUNT></ALLLEDGERENTRIES.LIST>
//! </VOUCHER></ENVELOPE>"#;
//!
//! let doc = tally::parse_document(xml).unwrap();
//! let rows = extract(&doc).unwrap();
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[0].amount, Some(dec!(500)));
//!
//! let csv = report::to_csv(&rows);
//! assert!(csv.lines().nth(2).unwrap().starts_with("15-04-2023,Child,R-1,INV-9,Agst Ref"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `xlsx` (default) | XLSX output via `rust_xlsxwriter` |
//! | `cli` (default) | `tally-daybook` command-line binary |

pub mod core;
pub mod report;
pub mod tally;

// Re-export core types at crate root for convenience
pub use crate::core::*;

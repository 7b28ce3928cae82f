//! Tally XML export reading.
//!
//! Tally ERP exports vouchers as an `ENVELOPE` of `TALLYMESSAGE` blocks, each
//! holding `VOUCHER` elements whose data lives entirely in element text:
//!
//! ```text
//! <VOUCHER>
//!   <VOUCHERTYPENAME>Receipt</VOUCHERTYPENAME>
//!   <DATE>20230415</DATE>
//!   <ALLLEDGERENTRIES.LIST>
//!     <LEDGERNAME>Acme</LEDGERNAME>
//!     <AMOUNT>-500.00</AMOUNT>
//!     <BILLALLOCATIONS.LIST>
//!       <NAME>INV-9</NAME>
//!       <AMOUNT>-500.00</AMOUNT>
//!     </BILLALLOCATIONS.LIST>
//!   </ALLLEDGERENTRIES.LIST>
//! </VOUCHER>
//! ```
//!
//! The reader builds a small owned element tree; no schema is enforced.

mod document;

pub use document::{
    Document, Element, MAX_DEPTH, decode_bytes, parse_document, read_document,
};

/// Tag of a voucher element.
pub const VOUCHER: &str = "VOUCHER";
/// Tag of a ledger entry within a voucher.
pub const LEDGER_ENTRY: &str = "ALLLEDGERENTRIES.LIST";
/// Tag of a bill allocation within a ledger entry.
pub const BILL_ALLOCATION: &str = "BILLALLOCATIONS.LIST";

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::parse::format_tally_date;

/// Placeholder rendered for fields that do not apply to a row's transaction type.
pub const NOT_APPLICABLE: &str = "NA";

/// Reference type written on every bill-allocation row.
pub const AGAINST_REFERENCE: &str = "Agst Ref";

/// Output columns, in sheet order.
pub const COLUMNS: [&str; 12] = [
    "Date",
    "Transaction Type",
    "Vch No.",
    "Ref No",
    "Ref Type",
    "Ref Date",
    "Debtor",
    "Ref Amount",
    "Amount",
    "Particulars",
    "Vch Type",
    "Amount Verified",
];

/// Role of a row within its voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Voucher summary row, carries the settled total.
    Parent,
    /// One bill allocation settled by the voucher.
    Child,
    /// The contra ledger entry (last entry of the voucher).
    Other,
}

impl TransactionType {
    /// Label written to the "Transaction Type" column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Child => "Child",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the receipt daybook.
///
/// Fields that do not apply to the row's [`TransactionType`] are `None`
/// (or `false` for `amount_verified`); they are rendered as `NA` by
/// [`Row::cells`].
///
/// Serialized, amounts are decimal strings and dates ISO 8601. A `ref_date`
/// of `None` is omitted and `Some(None)` is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Voucher date.
    pub date: NaiveDate,
    /// Parent, Child or Other.
    pub transaction_type: TransactionType,
    /// Voucher number, empty when the voucher has none.
    pub vch_no: String,
    /// Bill reference name (Child rows).
    pub ref_no: Option<String>,
    /// Always [`AGAINST_REFERENCE`] on Child rows.
    pub ref_type: Option<String>,
    /// Voucher reference date (Child rows). `Some(None)` means the voucher
    /// carries no reference date and renders as an empty cell, not `NA`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub ref_date: Option<Option<NaiveDate>>,
    /// Party ledger (Parent, Child) or last ledger entry name (Other).
    pub debtor: String,
    /// Absolute bill amount (Child rows).
    pub ref_amount: Option<Decimal>,
    /// Settled total (Parent) or signed contra amount (Other).
    pub amount: Option<Decimal>,
    /// Same source as `debtor`.
    pub particulars: String,
    /// Voucher type name as written in the export.
    pub vch_type: String,
    /// Renders "Yes" when set. Only Parent rows are verified.
    pub amount_verified: bool,
}

/// A present field deserializes to `Some`, even when it is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A rendered cell, ready for a tabular writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Written verbatim; may be empty.
    Text(String),
    /// An amount. XLSX stores it as a number.
    Number(Decimal),
    /// The `NA` placeholder.
    NotApplicable,
}

impl Cell {
    fn text_or_na(value: &Option<String>) -> Self {
        match value {
            Some(s) => Cell::Text(s.clone()),
            None => Cell::NotApplicable,
        }
    }

    fn number_or_na(value: Option<Decimal>) -> Self {
        match value {
            Some(d) => Cell::Number(d),
            None => Cell::NotApplicable,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(d) => write!(f, "{}", d.normalize()),
            Cell::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

impl Row {
    /// Render the row into cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [Cell; 12] {
        let ref_date = match self.ref_date {
            None => Cell::NotApplicable,
            Some(None) => Cell::Text(String::new()),
            Some(Some(d)) => Cell::Text(format_tally_date(d)),
        };
        let verified = if self.amount_verified {
            Cell::Text("Yes".into())
        } else {
            Cell::NotApplicable
        };

        [
            Cell::Text(format_tally_date(self.date)),
            Cell::Text(self.transaction_type.label().into()),
            Cell::Text(self.vch_no.clone()),
            Cell::text_or_na(&self.ref_no),
            Cell::text_or_na(&self.ref_type),
            ref_date,
            Cell::Text(self.debtor.clone()),
            Cell::number_or_na(self.ref_amount),
            Cell::number_or_na(self.amount),
            Cell::Text(self.particulars.clone()),
            Cell::Text(self.vch_type.clone()),
            verified,
        ]
    }
}

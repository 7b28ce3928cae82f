//! Receipt voucher extraction: Tally document in, daybook rows out.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::config::DaybookConfig;
use super::error::DaybookError;
use super::parse::{parse_amount, parse_tally_date};
use super::row::{AGAINST_REFERENCE, Row, TransactionType};
use crate::tally::{BILL_ALLOCATION, Document, Element, LEDGER_ENTRY};

/// Date used when a voucher has no `DATE`.
pub const DEFAULT_VOUCHER_DATE: &str = "19000101";

/// Voucher-level fields shared by every row of a voucher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoucherHeader {
    /// `VOUCHERTYPENAME` as written in the export.
    pub vch_type: String,
    pub date: NaiveDate,
    /// `VOUCHERNUMBER`, empty when absent.
    pub number: String,
    /// `REFERENCE`, `"NA"` when absent. Read for completeness; no daybook
    /// column carries it.
    pub reference: String,
    /// `REFERENCEDATE`, `None` when absent or empty.
    pub reference_date: Option<NaiveDate>,
    /// `PARTYLEDGERNAME`, `"Unknown"` when absent.
    pub party: String,
}

impl VoucherHeader {
    /// Read the header fields of a `VOUCHER` element.
    pub fn read(voucher: &Element) -> Result<Self, DaybookError> {
        let vch_type = voucher.field("VOUCHERTYPENAME").to_string();
        let number = voucher.field("VOUCHERNUMBER").to_string();
        let date = parse_tally_date(
            "DATE",
            voucher.field_or("DATE", DEFAULT_VOUCHER_DATE),
            &number,
        )?;
        let reference = voucher.field_or("REFERENCE", "NA").to_string();
        let reference_date = match voucher.field("REFERENCEDATE") {
            "" => None,
            raw => Some(parse_tally_date("REFERENCEDATE", raw, &number)?),
        };
        let party = voucher.field_or("PARTYLEDGERNAME", "Unknown").to_string();

        Ok(Self {
            vch_type,
            date,
            number,
            reference,
            reference_date,
            party,
        })
    }
}

/// Counters from one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// `VOUCHER` elements found in the document.
    pub vouchers_seen: usize,
    /// Vouchers of the configured type that produced rows.
    pub vouchers_exported: usize,
}

/// Build daybook rows for all receipt vouchers in `doc`.
pub fn extract(doc: &Document) -> Result<Vec<Row>, DaybookError> {
    extract_with(doc, &DaybookConfig::default()).map(|(rows, _)| rows)
}

/// Build daybook rows for all vouchers of `config.voucher_type`.
///
/// Rows come out in voucher order; each voucher yields its Parent row, its
/// Child rows, then its Other row. The first malformed date or amount aborts
/// the whole extraction.
pub fn extract_with(
    doc: &Document,
    config: &DaybookConfig,
) -> Result<(Vec<Row>, ExtractStats), DaybookError> {
    config.validate()?;

    let mut rows = Vec::new();
    let mut stats = ExtractStats::default();

    for voucher in doc.vouchers() {
        stats.vouchers_seen += 1;

        let vch_type = voucher.field("VOUCHERTYPENAME");
        if vch_type.to_lowercase() != config.voucher_type {
            debug!(
                vch_type,
                vch_no = voucher.field("VOUCHERNUMBER"),
                "skipping voucher"
            );
            continue;
        }

        let before = rows.len();
        voucher_rows(voucher, &mut rows)?;
        if rows.len() > before {
            stats.vouchers_exported += 1;
        }
    }

    Ok((rows, stats))
}

/// Append the rows of one voucher to `out`.
fn voucher_rows(voucher: &Element, out: &mut Vec<Row>) -> Result<(), DaybookError> {
    let header = VoucherHeader::read(voucher)?;

    let entries = voucher.find_all(LEDGER_ENTRY);
    let Some((last, settled)) = entries.split_last() else {
        debug!(vch_no = %header.number, "voucher has no ledger entries");
        return Ok(());
    };

    let mut total = Decimal::ZERO;
    for entry in settled {
        let raw = entry.field_or("AMOUNT", "0");
        let amount = parse_amount("AMOUNT", raw, &header.number)?;
        total = total
            .checked_add(amount.abs())
            .ok_or_else(|| DaybookError::NumericParse {
                field: "AMOUNT",
                value: raw.to_string(),
                voucher: header.number.clone(),
            })?;
    }

    out.push(Row {
        date: header.date,
        transaction_type: TransactionType::Parent,
        vch_no: header.number.clone(),
        ref_no: None,
        ref_type: None,
        ref_date: None,
        debtor: header.party.clone(),
        ref_amount: None,
        amount: Some(total),
        particulars: header.party.clone(),
        vch_type: header.vch_type.clone(),
        amount_verified: true,
    });

    for entry in settled {
        for bill in entry.find_all(BILL_ALLOCATION) {
            let amount = parse_amount("AMOUNT", bill.field_or("AMOUNT", "0"), &header.number)?;
            out.push(Row {
                date: header.date,
                transaction_type: TransactionType::Child,
                vch_no: header.number.clone(),
                ref_no: Some(bill.field_or("NAME", "NA").to_string()),
                ref_type: Some(AGAINST_REFERENCE.to_string()),
                ref_date: Some(header.reference_date),
                debtor: header.party.clone(),
                ref_amount: Some(amount.abs()),
                amount: None,
                particulars: header.party.clone(),
                vch_type: header.vch_type.clone(),
                amount_verified: false,
            });
        }
    }

    let contra = last.field_or("LEDGERNAME", "Unknown").to_string();
    let contra_amount = parse_amount("AMOUNT", last.field_or("AMOUNT", "0"), &header.number)?;
    out.push(Row {
        date: header.date,
        transaction_type: TransactionType::Other,
        vch_no: header.number,
        ref_no: None,
        ref_type: None,
        ref_date: None,
        debtor: contra.clone(),
        ref_amount: None,
        amount: Some(contra_amount),
        particulars: contra,
        vch_type: header.vch_type,
        amount_verified: false,
    });

    Ok(())
}

//! Field-level parsing for Tally values.
//!
//! Tally writes dates as `YYYYMMDD` and amounts as signed decimal strings
//! (`-500.00`). The daybook shows dates as `DD-MM-YYYY`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::error::DaybookError;

/// Display format of dates in the daybook.
pub const DAYBOOK_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a Tally `YYYYMMDD` date.
///
/// `field` and `voucher` are only used to describe the failure.
pub fn parse_tally_date(
    field: &'static str,
    value: &str,
    voucher: &str,
) -> Result<NaiveDate, DaybookError> {
    let err = || DaybookError::DateFormat {
        field,
        value: value.to_string(),
        voucher: voucher.to_string(),
    };

    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    // All-ASCII, so the byte slices below fall on char boundaries.
    let year: i32 = value[0..4].parse().map_err(|_| err())?;
    let month: u32 = value[4..6].parse().map_err(|_| err())?;
    let day: u32 = value[6..8].parse().map_err(|_| err())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)
}

/// Format a date the way the daybook shows it (`DD-MM-YYYY`).
pub fn format_tally_date(date: NaiveDate) -> String {
    date.format(DAYBOOK_DATE_FORMAT).to_string()
}

/// Parse a `DD-MM-YYYY` date as written by [`format_tally_date`].
pub fn parse_daybook_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DAYBOOK_DATE_FORMAT).ok()
}

/// Parse a signed Tally amount such as `-1250.50`.
///
/// Surrounding whitespace is ignored; exponent notation is accepted. Values
/// outside the `Decimal` range are rejected like malformed ones.
pub fn parse_amount(
    field: &'static str,
    value: &str,
    voucher: &str,
) -> Result<Decimal, DaybookError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| DaybookError::NumericParse {
            field,
            value: value.to_string(),
            voucher: voucher.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn tally_date_reformats() {
        let d = parse_tally_date("DATE", "20230415", "R-1").unwrap();
        assert_eq!(format_tally_date(d), "15-04-2023");
    }

    #[test]
    fn default_date_is_valid() {
        let d = parse_tally_date("DATE", "19000101", "").unwrap();
        assert_eq!(format_tally_date(d), "01-01-1900");
    }

    #[test]
    fn tally_date_rejects_malformed() {
        for bad in ["2023-04-15", "2023041", "202304150", "20231301", "20230230", "2023O415", ""] {
            let err = parse_tally_date("DATE", bad, "R-1").unwrap_err();
            assert!(
                matches!(err, DaybookError::DateFormat { field: "DATE", .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn tally_date_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII.
        assert!(parse_tally_date("DATE", "٢٠٢٣٠٤١٥", "").is_err());
    }

    #[test]
    fn daybook_date_parses_back() {
        let d = parse_daybook_date("15-04-2023").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 4, 15).unwrap());
        assert!(parse_daybook_date("2023-04-15").is_none());
    }

    #[test]
    fn amounts() {
        assert_eq!(parse_amount("AMOUNT", "-500.00", "").unwrap(), dec!(-500));
        assert_eq!(parse_amount("AMOUNT", " 1250.5 ", "").unwrap(), dec!(1250.5));
        assert_eq!(parse_amount("AMOUNT", "0", "").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("AMOUNT", "1.5e3", "").unwrap(), dec!(1500));
    }

    #[test]
    fn amount_out_of_decimal_range_is_rejected() {
        for value in ["1e30", "-1e30", "99999999999999999999999999999999"] {
            assert!(
                matches!(
                    parse_amount("AMOUNT", value, "R-1"),
                    Err(DaybookError::NumericParse { .. })
                ),
                "{value}"
            );
        }
    }

    #[test]
    fn amount_rejects_text() {
        let err = parse_amount("AMOUNT", "five hundred", "R-7").unwrap_err();
        match err {
            DaybookError::NumericParse { field, value, voucher } => {
                assert_eq!(field, "AMOUNT");
                assert_eq!(value, "five hundred");
                assert_eq!(voucher, "R-7");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

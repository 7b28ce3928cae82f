//! CSV rendering of the daybook.
//!
//! Comma separated with a header line and CRLF line endings, the dialect
//! spreadsheet applications open without an import dialog.

use crate::core::{COLUMNS, Row};

/// Render rows as CSV text.
pub fn to_csv(rows: &[Row]) -> String {
    let mut out = String::new();
    for (i, col) in COLUMNS.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        csv_field(&mut out, col);
    }
    out.push_str("\r\n");

    for row in rows {
        for (i, cell) in row.cells().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            csv_field(&mut out, &cell.to_string());
        }
        out.push_str("\r\n");
    }
    out
}

/// Append a field, quoting only when the value would otherwise split.
fn csv_field(out: &mut String, value: &str) {
    if !value.contains([',', '"', '\r', '\n']) {
        out.push_str(value);
        return;
    }
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(value: &str) -> String {
        let mut out = String::new();
        csv_field(&mut out, value);
        out
    }

    #[test]
    fn plain_fields_are_unquoted() {
        assert_eq!(field("Acme Traders"), "Acme Traders");
        assert_eq!(field(""), "");
    }

    #[test]
    fn special_fields_are_quoted() {
        assert_eq!(field("Smith, Jones"), "\"Smith, Jones\"");
        assert_eq!(field("5\" pipe"), "\"5\"\" pipe\"");
        assert_eq!(field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn empty_daybook_has_header_only() {
        assert_eq!(
            to_csv(&[]),
            "Date,Transaction Type,Vch No.,Ref No,Ref Type,Ref Date,Debtor,Ref Amount,Amount,Particulars,Vch Type,Amount Verified\r\n"
        );
    }
}

use thiserror::Error;

/// Errors that can occur while reading a Tally export or writing the daybook.
///
/// Every variant is fatal: a run either converts the whole document or
/// produces nothing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DaybookError {
    /// Input file missing, undecodable, or not well-formed XML.
    #[error("failed to read document: {0}")]
    DocumentRead(String),

    /// A `DATE` or `REFERENCEDATE` value is not a valid `YYYYMMDD` date.
    #[error("voucher '{voucher}': {field} '{value}' is not a YYYYMMDD date")]
    DateFormat {
        /// Source tag the value was read from.
        field: &'static str,
        /// The raw text found in the document.
        value: String,
        /// Voucher number of the offending voucher (may be empty).
        voucher: String,
    },

    /// An `AMOUNT` value is not a decimal number.
    #[error("voucher '{voucher}': {field} '{value}' is not a decimal number")]
    NumericParse {
        /// Source tag the value was read from.
        field: &'static str,
        /// The raw text found in the document.
        value: String,
        /// Voucher number of the offending voucher (may be empty).
        voucher: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unsupported output format or spreadsheet serialization failure.
    #[error("write error: {0}")]
    Write(String),

    /// Failure writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_error_names_voucher_and_value() {
        let err = DaybookError::DateFormat {
            field: "DATE",
            value: "2023-04-15".into(),
            voucher: "R-1".into(),
        };
        assert_eq!(
            err.to_string(),
            "voucher 'R-1': DATE '2023-04-15' is not a YYYYMMDD date"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DaybookError = io.into();
        assert!(matches!(err, DaybookError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}

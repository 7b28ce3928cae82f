//! Daybook output: CSV and XLSX writers plus the file-to-file conversion.
//!
//! # Example
//!
//! ```no_run
//! use tally_daybook::core::DaybookConfig;
//! use tally_daybook::report;
//!
//! let summary = report::convert_file(
//!     "xml/input.xml",
//!     "tally_receipt_daybook.xlsx",
//!     &DaybookConfig::default(),
//! )
//! .unwrap();
//! println!("{} rows written", summary.rows);
//! ```

mod csv_export;
#[cfg(feature = "xlsx")]
mod xlsx;

use std::path::Path;
use tracing::info;

use crate::core::{DaybookConfig, DaybookError, Row, extract_with};
use crate::tally::read_document;

pub use csv_export::to_csv;
#[cfg(feature = "xlsx")]
pub use xlsx::to_xlsx;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

impl OutputFormat {
    /// Pick the format from the output file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, DaybookError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx") => Ok(Self::Xlsx),
            _ => Err(DaybookError::Write(format!(
                "unsupported output file '{}', expected .xlsx or .csv",
                path.display()
            ))),
        }
    }

    /// Name used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Xlsx => "Excel",
        }
    }
}

/// Serialize rows in the given format.
pub fn render(
    rows: &[Row],
    format: OutputFormat,
    config: &DaybookConfig,
) -> Result<Vec<u8>, DaybookError> {
    match format {
        OutputFormat::Csv => Ok(to_csv(rows).into_bytes()),
        #[cfg(feature = "xlsx")]
        OutputFormat::Xlsx => to_xlsx(rows, config),
        #[cfg(not(feature = "xlsx"))]
        OutputFormat::Xlsx => {
            let _ = config;
            Err(DaybookError::Write("built without the `xlsx` feature".into()))
        }
    }
}

/// Outcome of a successful [`convert_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub format: OutputFormat,
    pub vouchers_seen: usize,
    pub vouchers_exported: usize,
    pub rows: usize,
}

/// Convert a Tally XML export into a daybook file.
///
/// The output is written only after the whole document has been read,
/// extracted, and serialized, so a failed run leaves any existing file at
/// `output` as it was. An existing file is overwritten on success.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &DaybookConfig,
) -> Result<Summary, DaybookError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    config.validate()?;
    let format = OutputFormat::from_path(output)?;

    let doc = read_document(input)?;
    let (rows, stats) = extract_with(&doc, config)?;
    let bytes = render(&rows, format, config)?;
    std::fs::write(output, bytes)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        vouchers = stats.vouchers_exported,
        rows = rows.len(),
        "{} file written",
        format.label()
    );

    Ok(Summary {
        format,
        vouchers_seen: stats.vouchers_seen,
        vouchers_exported: stats.vouchers_exported,
        rows: rows.len(),
    })
}

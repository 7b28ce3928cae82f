//! XLSX rendering of the daybook.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::core::{COLUMNS, Cell, DaybookConfig, DaybookError, Row};

fn xlsx_err(e: XlsxError) -> DaybookError {
    DaybookError::Write(format!("XLSX error: {e}"))
}

/// Render rows as a single-sheet XLSX workbook.
///
/// The header row is bold. Amounts are written as numbers so the sheet can
/// sum them; `NA` placeholders and dates are text.
pub fn to_xlsx(rows: &[Row], config: &DaybookConfig) -> Result<Vec<u8>, DaybookError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(&config.sheet_name).map_err(xlsx_err)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *name, &header)
            .map_err(xlsx_err)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = u32::try_from(i + 1)
            .map_err(|_| DaybookError::Write("too many rows for one worksheet".into()))?;
        for (col, cell) in row.cells().iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Number(d) => {
                    let n = d.to_f64().ok_or_else(|| {
                        DaybookError::Write(format!("amount {d} cannot be written as a number"))
                    })?;
                    sheet.write_number(r, col, n).map_err(xlsx_err)?;
                }
                other => {
                    sheet.write_string(r, col, other.to_string()).map_err(xlsx_err)?;
                }
            }
        }
    }

    workbook.save_to_buffer().map_err(xlsx_err)
}

use std::{fs, path::{Path, PathBuf}};

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::{export_dir::ensure_export_dir, ExportError};
use crate::domain::{
    format_money,
    report::{spreadsheet_file_name, spreadsheet_rows, CellValue, ReportRow, SHEET_NAME},
    CalculationResults, CalculatorInputs,
};

/// Builds the single-sheet workbook in memory.
pub fn render_workbook(rows: &[ReportRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.write_string_with_format(0, 0, "Category", &header)?;
    worksheet.write_string_with_format(0, 1, "Value", &header)?;

    for (idx, row) in rows.iter().enumerate() {
        let excel_row = idx as u32 + 1;
        worksheet.write_string(excel_row, 0, row.category)?;
        match &row.value {
            CellValue::Text(text) => {
                worksheet.write_string(excel_row, 1, text.as_str())?;
            }
            // Excel has no representation for inf/NaN.
            CellValue::Number(value) if !value.is_finite() => {
                worksheet.write_string(excel_row, 1, format_money(*value, 2))?;
            }
            CellValue::Number(value) => {
                worksheet.write_number(excel_row, 1, *value)?;
            }
        }
    }
    worksheet.set_column_width(0, 32)?;
    worksheet.set_column_width(1, 18)?;

    workbook.save_to_buffer()
}

pub fn export_spreadsheet(
    dir: &Path,
    inputs: &CalculatorInputs,
    results: &CalculationResults,
) -> Result<PathBuf, ExportError> {
    ensure_export_dir(dir)?;
    let rows = spreadsheet_rows(inputs, results);
    let bytes = render_workbook(&rows)?;
    let path = dir.join(spreadsheet_file_name(&inputs.product_name));
    fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), "spreadsheet exported");
    Ok(path)
}

use std::{
    fs,
    io::BufWriter,
    path::{Path, PathBuf},
};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use time::{format_description, Date, OffsetDateTime};

use super::{export_dir::ensure_export_dir, ExportError};
use crate::domain::{
    report::{document_file_name, document_lines, DOCUMENT_TITLE},
    CalculationResults, CalculatorInputs,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MM: f32 = 20.0;
const VALUE_COLUMN_MM: f32 = 130.0;
const FIRST_LINE_MM: f32 = 50.0;
const LINE_STEP_MM: f32 = 8.0;

/// Page positions are given from the top edge; PDF measures from the bottom.
fn from_top(y_mm: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - y_mm)
}

pub fn format_generated_date(date: Date) -> Result<String, ExportError> {
    let description = format_description::parse("[day]/[month]/[year]")
        .map_err(|err| ExportError::DateFormat(err.to_string()))?;
    date.format(&description)
        .map_err(|err| ExportError::DateFormat(err.to_string()))
}

/// Lays out the one-page summary and returns the encoded PDF.
pub fn render_document(
    inputs: &CalculatorInputs,
    results: &CalculationResults,
    generated_on: Date,
) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Summary",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| ExportError::Document(err.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| ExportError::Document(err.to_string()))?;
    let canvas = doc.get_page(page).get_layer(layer);

    canvas.use_text(DOCUMENT_TITLE, 20.0, Mm(LEFT_MM), from_top(20.0), &regular);
    let subtitle = format!(
        "Generated for: {} | {}",
        inputs.product_name,
        format_generated_date(generated_on)?
    );
    canvas.use_text(subtitle, 10.0, Mm(LEFT_MM), from_top(30.0), &regular);

    let mut y = FIRST_LINE_MM;
    for line in document_lines(inputs, results) {
        let font = if line.emphasis { &bold } else { &regular };
        canvas.use_text(line.label, 10.0, Mm(LEFT_MM), from_top(y), font);
        canvas.use_text(line.value, 10.0, Mm(VALUE_COLUMN_MM), from_top(y), font);
        y += LINE_STEP_MM;
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|err| ExportError::Document(err.to_string()))?;
    writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))
}

pub fn export_document(
    dir: &Path,
    inputs: &CalculatorInputs,
    results: &CalculationResults,
) -> Result<PathBuf, ExportError> {
    ensure_export_dir(dir)?;
    let today = OffsetDateTime::now_utc().date();
    let bytes = render_document(inputs, results, today)?;
    let path = dir.join(document_file_name(&inputs.product_name));
    fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), "document exported");
    Ok(path)
}

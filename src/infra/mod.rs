//! File exports of the current calculation.

use std::io;

pub mod document;
pub mod export_dir;
pub mod spreadsheet;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export directory unavailable: {0}")]
    ExportDirUnavailable(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("spreadsheet export failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
    #[error("document export failed: {0}")]
    Document(String),
    #[error("failed to format export date: {0}")]
    DateFormat(String),
}

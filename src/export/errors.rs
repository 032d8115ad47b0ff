use rust_xlsxwriter::XlsxError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write worksheet [{sheet}]: {source}")]
    Sheet {
        sheet: String,
        source: XlsxError
    },
    #[error("Failed to save workbook [{path}]: {source}")]
    Save {
        path: PathBuf,
        source: XlsxError
    }
}

impl ExportError {
    pub fn sheet(sheet: &str, source: XlsxError) -> Self {
        Self::Sheet { sheet: sheet.to_string(), source }
    }

    pub fn save(path: impl Into<PathBuf>, source: XlsxError) -> Self {
        Self::Save { path: path.into(), source }
    }
}

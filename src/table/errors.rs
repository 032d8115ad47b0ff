use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Unable to read [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("CSV error in [{path}]: {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Excel error in [{path}]: {source}")]
    Xlsx {
        path: PathBuf,
        source: calamine::Error
    },
    #[error("Workbook [{path}] has no worksheet with a header row")]
    EmptySheet {
        path: PathBuf
    },
    #[error("Unsupported input format for [{path}], expected .xlsx or .csv")]
    UnsupportedFormat {
        path: PathBuf
    }
}

impl TableError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv { path: path.into(), source }
    }

    pub fn xlsx(path: impl Into<PathBuf>, source: impl Into<calamine::Error>) -> Self {
        Self::Xlsx { path: path.into(), source: source.into() }
    }

    pub fn empty_sheet(path: impl Into<PathBuf>) -> Self {
        Self::EmptySheet { path: path.into() }
    }

    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}

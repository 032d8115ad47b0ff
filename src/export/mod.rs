mod errors;
mod workbook;

pub use errors::ExportError;
pub use workbook::WorkbookExporter;

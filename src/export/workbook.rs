use crate::export::ExportError;
use crate::table::Table;
use crate::types::{format_day_first, Cell};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use tracing::debug;

const AMOUNT_FORMAT: &str = "0.00";

/// Writes named tables as worksheets of a single `.xlsx` workbook, in the order
/// they were added.
#[derive(Debug, Default)]
pub struct WorkbookExporter<'a> {
    sheets: Vec<(&'a str, &'a Table)>
}

impl<'a> WorkbookExporter<'a> {
    pub fn new() -> Self {
        Self {
            sheets: Vec::new()
        }
    }

    pub fn sheet(mut self, name: &'a str, table: &'a Table) -> Self {
        self.sheets.push((name, table));
        self
    }

    /// Saves the workbook to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        let mut workbook = self.build()?;

        workbook.save(path).map_err(|error| ExportError::save(path, error))?;

        debug!("Saved {} worksheets to [{}]", self.sheets.len(), path.display());

        Ok(())
    }

    fn build(&self) -> Result<Workbook, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let amount_format = Format::new().set_num_format(AMOUNT_FORMAT);

        for (name, table) in &self.sheets {
            let worksheet = workbook.add_worksheet();

            write_sheet(worksheet, name, table, &header_format, &amount_format)
                .map_err(|error| ExportError::sheet(name, error))?;
        }

        Ok(workbook)
    }
}

fn write_sheet(worksheet: &mut Worksheet, name: &str, table: &Table, header_format: &Format, amount_format: &Format) -> Result<(), XlsxError> {
    worksheet.set_name(name)?;

    for (column, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, column_number(column), header, header_format)?;
    }

    for (index, row) in table.rows.iter().enumerate() {
        let row_number = u32::try_from(index + 1).unwrap_or(u32::MAX);

        for (column, cell) in row.iter().enumerate() {
            let column = column_number(column);

            match cell {
                Cell::Empty => {}
                Cell::Text(value) => {
                    worksheet.write_string(row_number, column, value)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row_number, column, *value)?;
                }
                Cell::Integer(value) => {
                    worksheet.write_number(row_number, column, *value as f64)?;
                }
                Cell::Amount(amount) => {
                    worksheet.write_number_with_format(row_number, column, amount.to_f64(), amount_format)?;
                }
                Cell::Date(date) => {
                    worksheet.write_string(row_number, column, format_day_first(*date))?;
                }
            }
        }
    }

    worksheet.autofit();

    Ok(())
}

// Out of range positions saturate so the writer reports its own limit error.
fn column_number(index: usize) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX)
}

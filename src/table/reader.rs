use crate::table::{Table, TableError};
use crate::types::{Cell, DateField};
use calamine::{open_workbook_auto, Data, Reader};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reads a reservation table, choosing the reader from the file extension.
pub fn read_table(path: &Path) -> Result<Table, TableError> {
    let extension = path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx" | "xlsm" | "xls" | "ods") => read_xlsx(path),
        Some("csv") => read_csv(path),
        _ => Err(TableError::unsupported_format(path))
    }
}

/// Reads the first worksheet of a workbook. The first row holds the column names.
pub fn read_xlsx(path: &Path) -> Result<Table, TableError> {
    let mut workbook = open_workbook_auto(path).map_err(|error| TableError::xlsx(path, error))?;

    let range = workbook.worksheet_range_at(0)
        .ok_or_else(|| TableError::empty_sheet(path))?
        .map_err(|error| TableError::xlsx(path, error))?;

    let mut rows = range.rows();

    let Some(header_row) = rows.next() else {
        return Err(TableError::empty_sheet(path));
    };

    let headers = header_row.iter().enumerate()
        .map(|(index, cell)| match cell {
            Data::Empty => format!("Unnamed: {index}"),
            other => other.to_string()
        })
        .collect();

    let mut table = Table::new(headers);

    for row in rows {
        // Trailing blank rows are common in hand-maintained booking exports
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        table.push_row(row.iter().map(to_cell).collect());
    }

    debug!("Read {} rows from worksheet 0 of [{}]", table.row_count(), path.display());

    Ok(table)
}

/// Reads a comma separated file with a header row. Every non-empty field is text.
pub fn read_csv(path: &Path) -> Result<Table, TableError> {
    let file = File::open(path).map_err(|error| TableError::io(path, error))?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()
        .map_err(|error| TableError::csv(path, error))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = Table::new(headers);

    for result in reader.records() {
        let record = result.map_err(|error| TableError::csv(path, error))?;

        table.push_row(record.iter()
            .map(|field| if field.is_empty() { Cell::Empty } else { Cell::text(field) })
            .collect());
    }

    debug!("Read {} rows from [{}]", table.row_count(), path.display());

    Ok(table)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(value) => Cell::text(value.as_str()),
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Bool(value) => Cell::text(value.to_string()),
        Data::DateTime(date_time) => match DateField::from_cell(&Cell::Number(date_time.as_f64())) {
            DateField::Parsed(date) => Cell::Date(date),
            DateField::Invalid(_) => Cell::Number(date_time.as_f64())
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => Cell::text(value.as_str())
    }
}

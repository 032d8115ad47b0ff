use super::{expand_nights, normalize_original, parse_reservations, DailySplitDocument, NightSequence, SplitError};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{ReservationError, DAILY_SPLIT_COLUMNS};
use crate::table::Table;
use crate::types::{Cell, DateField, Monetary};

const HEADERS: [&str; 9] = [
    " Reservation Number", "Apartment", "Guest Name", "Channel", "Arrival ", "Departure", "Booking Date", "Base Revenue", "Total Revenue"
];

fn create_table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(headers.iter().map(|header| header.to_string()).collect());

    for row in rows {
        table.push_row(row.iter()
            .map(|value| if value.is_empty() { Cell::Empty } else { Cell::text(*value) })
            .collect());
    }

    table
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid test date"))
}

fn column(table: &Table, name: &str) -> Result<Vec<Cell>> {
    let index = table.column_index(name).ok_or_else(|| anyhow!("column [{name}] missing"))?;
    Ok(table.rows.iter().map(|row| row[index].clone()).collect())
}

fn split(input: &Table) -> Result<Table, SplitError> {
    Ok(DailySplitDocument::build(input)?.daily_split)
}

fn decimal(amount: Monetary) -> Result<Decimal> {
    Ok(Decimal::from_str(&amount.to_string())?)
}

fn amount(value: &str) -> Result<Cell> {
    Ok(Cell::Amount(Monetary::from_str(value)?))
}

#[test]
fn test_night_sequence_spans_arrival_to_day_before_departure() -> Result<()> {
    let nights: Vec<NaiveDate> = NightSequence::new(&DateField::parse("30/12/2023"), &DateField::parse("02/01/2024")).collect();

    assert_eq!(nights, vec![date(2023, 12, 30)?, date(2023, 12, 31)?, date(2024, 1, 1)?]);

    Ok(())
}

#[test]
fn test_night_sequence_is_empty_for_degenerate_or_invalid_stays() {
    let same_day = NightSequence::new(&DateField::parse("01/03/2024"), &DateField::parse("01/03/2024"));
    let reversed = NightSequence::new(&DateField::parse("05/03/2024"), &DateField::parse("01/03/2024"));
    let unreadable = NightSequence::new(&DateField::parse("??"), &DateField::parse("01/03/2024"));

    assert_eq!(same_day.count(), 0);
    assert_eq!(reversed.count(), 0);
    assert_eq!(unreadable.count(), 0);
}

#[test]
fn test_night_sequence_reports_exact_length_and_restarts() {
    let sequence = NightSequence::new(&DateField::parse("28/02/2024"), &DateField::parse("02/03/2024"));

    assert_eq!(sequence.len(), 3);
    assert_eq!(sequence.clone().count(), 3);
    assert_eq!(sequence.clone().collect::<Vec<_>>(), sequence.collect::<Vec<_>>());
}

#[test]
fn test_split_matches_worked_example() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "01/03/2024", "04/03/2024", "20/02/2024", "300", "330"],
    ]);

    let output = split(&input)?;

    assert_eq!(output.row_count(), 3);
    assert_eq!(column(&output, "Date")?, vec![Cell::text("01-03-2024"), Cell::text("02-03-2024"), Cell::text("03-03-2024")]);

    for row in &output.rows {
        assert_eq!(row, &vec![
            Cell::text("R1"),
            Cell::text("A1"),
            Cell::text("Jane"),
            Cell::text("Airbnb"),
            row[4].clone(),
            Cell::text("20-02-2024"),
            Cell::Integer(1),
            amount("100.00")?,
            amount("110.00")?,
        ]);
    }

    Ok(())
}

#[test]
fn test_split_reads_spreadsheet_typed_cells() -> Result<()> {
    let mut input = Table::new(HEADERS.iter().map(|header| header.to_string()).collect());
    input.push_row(vec![
        Cell::Number(1042.0),
        Cell::text("A1"),
        Cell::text("Jane"),
        Cell::text("Airbnb"),
        Cell::Date(date(2024, 2, 28)?),
        Cell::Number(45353.0),
        Cell::Date(date(2024, 2, 20)?),
        Cell::Number(100.0),
        Cell::Number(110.0),
    ]);

    let output = split(&input)?;

    assert_eq!(column(&output, "Reservation Number")?, vec![Cell::text("1042"); 3]);
    assert_eq!(column(&output, "Date")?, vec![Cell::text("28-02-2024"), Cell::text("29-02-2024"), Cell::text("01-03-2024")]);
    assert_eq!(column(&output, "Booking Date")?, vec![Cell::text("20-02-2024"); 3]);
    assert_eq!(column(&output, "Base Revenue")?, vec![amount("33.33")?; 3]);
    assert_eq!(column(&output, "Total Revenue")?, vec![amount("36.67")?; 3]);

    Ok(())
}

#[test]
fn test_split_conserves_night_counts_and_excludes_zero_night_stays() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "01/03/2024", "04/03/2024", "", "300", "330"],
        &["R2", "A2", "Omar", "Direct", "10/03/2024", "10/03/2024", "", "90", "90"],
        &["R3", "A3", "Lena", "Booking.com", "15/03/2024", "12/03/2024", "", "90", "90"],
        &["R4", "A1", "Kai", "Direct", "28/02/2024", "07/03/2024", "", "700", "770"],
    ]);

    let output = split(&input)?;
    let numbers = column(&output, "Reservation Number")?;

    assert_eq!(numbers.iter().filter(|cell| **cell == Cell::text("R1")).count(), 3);
    assert_eq!(numbers.iter().filter(|cell| **cell == Cell::text("R2")).count(), 0);
    assert_eq!(numbers.iter().filter(|cell| **cell == Cell::text("R3")).count(), 0);
    assert_eq!(numbers.iter().filter(|cell| **cell == Cell::text("R4")).count(), 8);
    assert_eq!(output.row_count(), 11);

    Ok(())
}

#[test]
fn test_split_preserves_reservation_order_and_ascending_nights() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R9", "A1", "Jane", "Airbnb", "05/03/2024", "07/03/2024", "", "20", "20"],
        &["R1", "A2", "Omar", "Direct", "01/03/2024", "03/03/2024", "", "20", "20"],
    ]);

    let output = split(&input)?;

    assert_eq!(column(&output, "Reservation Number")?, vec![Cell::text("R9"), Cell::text("R9"), Cell::text("R1"), Cell::text("R1")]);
    assert_eq!(column(&output, "Date")?, vec![
        Cell::text("05-03-2024"), Cell::text("06-03-2024"), Cell::text("01-03-2024"), Cell::text("02-03-2024")
    ]);

    Ok(())
}

#[test]
fn test_split_conserves_revenue_up_to_rounding() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "01/03/2024", "04/03/2024", "", "100", "200"],
        &["R2", "A2", "Omar", "Direct", "01/03/2024", "08/03/2024", "", "999.99", "1000.01"],
    ]);

    let reservations = parse_reservations(&input)?;
    let nights = expand_nights(&reservations);

    for reservation in &reservations {
        let own: Vec<_> = nights.iter().filter(|night| night.reservation_number == reservation.reservation_number).collect();
        let tolerance = Decimal::new(1, 2) * Decimal::from(own.len());

        let base_sum = own.iter().filter_map(|night| night.base_revenue).map(decimal).sum::<Result<Decimal>>()?;
        let total_sum = own.iter().filter_map(|night| night.total_revenue).map(decimal).sum::<Result<Decimal>>()?;

        let base = reservation.base_revenue.ok_or_else(|| anyhow!("base revenue missing"))?;
        let total = reservation.total_revenue.ok_or_else(|| anyhow!("total revenue missing"))?;

        assert!((base_sum - decimal(base)?).abs() <= tolerance);
        assert!((total_sum - decimal(total)?).abs() <= tolerance);
    }

    Ok(())
}

#[test]
fn test_split_schema_is_fixed_regardless_of_extra_columns() -> Result<()> {
    let input = create_table(
        &["Notes", "Total Revenue", "Departure", "Arrival", "Status", "Channel", "Guest Name", "Apartment", "Booking Date", "Reservation Number", "Base Revenue"],
        &[&["vip", "330", "04/03/2024", "01/03/2024", "confirmed", "Airbnb", "Jane", "A1", "20/02/2024", "R1", "300"]]
    );

    let output = split(&input)?;

    assert_eq!(output.headers, DAILY_SPLIT_COLUMNS.to_vec());
    assert!(output.rows.iter().all(|row| row.len() == DAILY_SPLIT_COLUMNS.len()));

    Ok(())
}

#[test]
fn test_split_leaves_unreadable_booking_date_empty() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "01/03/2024", "02/03/2024", "not a date", "50", "55"],
    ]);

    let output = split(&input)?;

    assert_eq!(column(&output, "Booking Date")?, vec![Cell::Empty]);

    Ok(())
}

#[test]
fn test_split_drops_reservation_with_unreadable_arrival() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "first of March", "04/03/2024", "", "300", "330"],
        &["R2", "A2", "Omar", "Direct", "01/03/2024", "02/03/2024", "", "80", "88"],
    ]);

    let output = split(&input)?;

    assert_eq!(column(&output, "Reservation Number")?, vec![Cell::text("R2")]);

    Ok(())
}

#[test]
fn test_split_keeps_blank_revenue_blank() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "01/03/2024", "03/03/2024", "", "", "100"],
    ]);

    let output = split(&input)?;

    assert_eq!(column(&output, "Base Revenue")?, vec![Cell::Empty, Cell::Empty]);
    assert_eq!(column(&output, "Total Revenue")?, vec![amount("50")?, amount("50")?]);

    Ok(())
}

#[test]
fn test_split_fails_without_channel_column() {
    let headers: Vec<&str> = HEADERS.iter().copied().filter(|header| *header != "Channel").collect();
    let input = create_table(&headers, &[&["R1", "A1", "Jane", "01/03/2024", "04/03/2024", "", "300", "330"]]);

    let result = split(&input);

    assert!(matches!(
        result,
        Err(SplitError::Reservation(ReservationError::MissingColumn { ref column })) if column == "Channel"
    ));
}

#[test]
fn test_split_accepts_sub_channel_as_channel_source() -> Result<()> {
    let mut headers = HEADERS.to_vec();
    headers[3] = "Sub Channel";
    let input = create_table(&headers, &[&["R1", "A1", "Jane", "Vrbo", "01/03/2024", "02/03/2024", "", "80", "88"]]);

    let output = split(&input)?;

    assert_eq!(column(&output, "Sub Channel")?, vec![Cell::text("Vrbo")]);

    Ok(())
}

#[test]
fn test_split_does_not_mutate_input() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "01/03/2024", "04/03/2024", "20/02/2024", "300", "330"],
    ]);
    let snapshot = input.clone();

    let _ = DailySplitDocument::build(&input)?;

    assert_eq!(input, snapshot);

    Ok(())
}

#[test]
fn test_original_normalizer_formats_dates_and_trims_headers() -> Result<()> {
    let mut input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "01/03/2024", "2024-03-04", "garbage", "300", "330"],
    ]);
    input.rows[0][6] = Cell::Number(45342.0);

    let original = normalize_original(&input)?;

    assert_eq!(original.headers[0], "Reservation Number");
    assert_eq!(original.headers[4], "Arrival");
    assert_eq!(original.headers.len(), HEADERS.len());
    assert_eq!(original.rows[0][4], Cell::text("01-03-2024"));
    assert_eq!(original.rows[0][5], Cell::text("04-03-2024"));
    assert_eq!(original.rows[0][6], Cell::text("20-02-2024"));
    assert_eq!(original.rows[0][7], Cell::text("300"));

    Ok(())
}

#[test]
fn test_original_normalizer_blanks_unreadable_dates() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "someday", "04/03/2024", "", "300", "330"],
    ]);

    let original = normalize_original(&input)?;

    assert_eq!(original.rows[0][4], Cell::Empty);
    assert_eq!(original.rows[0][6], Cell::Empty);

    Ok(())
}

#[test]
fn test_original_normalizer_requires_date_columns() {
    let headers: Vec<&str> = HEADERS.iter().copied().filter(|header| *header != "Booking Date").collect();
    let input = create_table(&headers, &[]);

    assert!(matches!(normalize_original(&input), Err(SplitError::Reservation(ReservationError::MissingColumn { .. }))));
}

#[test]
fn test_document_keeps_degenerate_stay_in_original_only() -> Result<()> {
    let input = create_table(&HEADERS, &[
        &["R1", "A1", "Jane", "Airbnb", "01/03/2024", "01/03/2024", "20/02/2024", "300", "330"],
        &["R2", "A2", "Omar", "Direct", "01/03/2024", "02/03/2024", "20/02/2024", "80", "88"],
    ]);

    let document = DailySplitDocument::build(&input)?;
    let names: Vec<&str> = document.sheets().iter().map(|(name, _)| *name).collect();

    assert_eq!(names, vec!["Original Data", "Reservations Daily Split"]);
    assert_eq!(document.original.row_count(), 2);
    assert_eq!(document.daily_split.row_count(), 1);
    assert_eq!(document.nights().len(), 1);

    Ok(())
}

use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

const APARTMENTS: [&str; 6] = ["A1", "A2", "B1", "B4", "C2", "Penthouse"];
const GUESTS: [&str; 8] = ["Jane Doe", "Omar Haddad", "Lena Berg", "Kai Tanaka", "Ana Souza", "Luca Rossi", "Mia Chen", "Noah Smith"];
const CHANNELS: [&str; 5] = ["Airbnb", "Booking.com", "Direct", "Expedia", "Vrbo"];

const MAX_NIGHTS: u64 = 14;
const MAX_LEAD_DAYS: u64 = 90;
const DEGENERATE_EVERY: usize = 50;
const UNREADABLE_EVERY: usize = 200;

struct GeneratorConfig {
    num_records: usize,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_records = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);
        let output_path = args.get(2).cloned().unwrap_or_else(|| "samples/generated_reservations.csv".to_string());

        Self {
            num_records,
            output_path,
        }
    }
}

fn pick<'a>(values: &[&'a str]) -> &'a str {
    values[(rand::random::<u64>() % values.len() as u64) as usize]
}

fn below(limit: u64) -> u64 {
    rand::random::<u64>() % limit
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!("Generating {} reservations in {}...", config.num_records, config.output_path);

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(&config.output_path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Reservation Number,Apartment,Guest Name,Channel,Arrival,Departure,Booking Date,Base Revenue,Total Revenue")?;

    let season_start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for index in 0..config.num_records {
        let arrival = season_start + Days::new(below(365));
        let nights = if index % DEGENERATE_EVERY == 0 { 0 } else { 1 + below(MAX_NIGHTS) };
        let departure = arrival + Days::new(nights);
        let booked = arrival - Days::new(1 + below(MAX_LEAD_DAYS));

        let nightly_rate = Decimal::new(6_000 + below(24_000) as i64, 2);
        let base_revenue = nightly_rate * Decimal::from(nights.max(1));
        let total_revenue = (base_revenue * Decimal::new(112, 2)).round_dp(2);

        let arrival_text = if index % UNREADABLE_EVERY == 0 {
            "TBC".to_string()
        } else {
            arrival.format("%d/%m/%Y").to_string()
        };

        writeln!(
            writer,
            "R{:06},{},{},{},{},{},{},{},{}",
            index + 1,
            pick(&APARTMENTS),
            pick(&GUESTS),
            pick(&CHANNELS),
            arrival_text,
            departure.format("%d/%m/%Y"),
            booked.format("%d/%m/%Y"),
            base_revenue,
            total_revenue
        )?;
    }

    writer.flush()?;

    println!("Done.");

    Ok(())
}

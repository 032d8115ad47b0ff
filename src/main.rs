mod config;
mod engine;
mod export;
mod models;
mod table;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Config;
use crate::engine::DailySplitDocument;
use crate::export::WorkbookExporter;

fn main() {
    let config = Config::parse();

    setup_logging(parse_log_level(&config.log_level));

    if let Err(error) = run(&config) {
        eprintln!("Something went wrong: {error:#}");
        exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let timer = Instant::now();

    let input = table::read_table(&config.input)?;
    info!("Loaded {} reservations from [{}]", input.row_count(), config.input.display());

    let document = DailySplitDocument::build(&input)?;

    let mut exporter = WorkbookExporter::new();
    for (name, table) in document.sheets() {
        exporter = exporter.sheet(name, table);
    }
    exporter.save(&config.output)?;

    info!("Wrote [{}] in {:?}", config.output.display(), timer.elapsed());

    if let Some(rows) = config.preview {
        write_preview_to_stdout(&document, rows)?;
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the preview, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_preview_to_stdout(document: &DailySplitDocument, rows: usize) -> Result<()> {
    let mut writer = csv::Writer::from_writer(BufWriter::new(stdout().lock()));

    for night in document.nights().iter().take(rows) {
        writer.serialize(night)?;
    }

    writer.flush()?;

    Ok(())
}

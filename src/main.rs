use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_insights::config::{Config, USAGE};
use transaction_insights::engine::QueryEngine;
use transaction_insights::report::write_report;
use transaction_insights::storage::{load_or_empty, FileSource};

fn main() -> Result<()> {
    let config = match Config::from_args(std::env::args()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let timer = Instant::now();
    let transactions = match FileSource::from_path(&config.input_path) {
        Ok(source) => load_or_empty(&source),
        Err(error) => {
            error!("{error}, continuing with no transactions");
            Vec::new()
        }
    };
    let duration = timer.elapsed();

    info!("Loaded transactions in: {duration:?}");

    let engine = QueryEngine::new(transactions);

    write_report(&engine, BufWriter::new(stdout().lock()))?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

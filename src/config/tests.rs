use super::{parse_log_level, Config, ConfigError};
use anyhow::Result;
use std::path::Path;
use tracing::level_filters::LevelFilter;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_config_requires_an_input_path() {
    let result = Config::from_args(args(&["transaction-insights"]));

    assert!(matches!(result, Err(ConfigError::MissingInput)));
}

#[test]
fn test_config_defaults_log_level_to_error() -> Result<()> {
    let config = Config::from_args(args(&["transaction-insights", "samples/transactions.json"]))?;

    assert_eq!(config.input_path, Path::new("samples/transactions.json"));
    assert_eq!(config.log_level, LevelFilter::ERROR);

    Ok(())
}

#[test]
fn test_config_reads_optional_log_level() -> Result<()> {
    let config = Config::from_args(args(&["transaction-insights", "input.csv", "DEBUG"]))?;

    assert_eq!(config.log_level, LevelFilter::DEBUG);

    Ok(())
}

#[test]
fn test_unknown_log_level_falls_back_to_error() {
    assert_eq!(parse_log_level("verbose"), LevelFilter::ERROR);
    assert_eq!(parse_log_level("warn"), LevelFilter::WARN);
    assert_eq!(parse_log_level("Trace"), LevelFilter::TRACE);
}

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub const USAGE: &str = "Usage: transaction-insights [input].json|[input].csv [log_level:optional] > [report].csv";

/// Command-line configuration for the report binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Transaction file to load, format chosen by extension.
    pub input_path: PathBuf,
    /// Verbosity of the stderr log.
    pub log_level: LevelFilter
}

impl Config {
    /// Builds the configuration from process arguments, the first being the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().skip(1);

        let input_path = args.next()
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingInput)?;

        let log_level = args.next()
            .map(|level| parse_log_level(&level))
            .unwrap_or(LevelFilter::ERROR);

        Ok(Self { input_path, log_level })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing input file argument")]
    MissingInput
}

pub fn parse_log_level(level: &str) -> LevelFilter {
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

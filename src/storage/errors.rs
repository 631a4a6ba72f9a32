use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error opening transactions at path: {} | {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("JSON deserialization error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error
    },
    #[error("CSV deserialization error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Unsupported transaction file format: {}", .0.display())]
    UnsupportedFormat(PathBuf)
}

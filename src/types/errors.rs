use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonetaryError {
    #[error("Monetary error: {0}")]
    InvalidFormat(String),
    #[error("Monetary error: {0}")]
    ParseFloat(#[from] ParseFloatError),
    #[error("Monetary error: Amount [{0}] is negative")]
    Negative(f64),
    #[error("Monetary error: Amount is not a finite number")]
    NotFinite
}

mod errors;
mod file_source;

use tracing::{error, info};

use crate::models::Transaction;

pub use errors::LoadError;
pub use file_source::{CsvFileSource, FileSource, JsonFileSource};

/// Produces the ordered sequence of transactions the query engine runs over.
pub trait TransactionSource {
    fn load(&self) -> Result<Vec<Transaction>, LoadError>;
}

/// Loads every transaction from the source, degrading any failure to an empty sequence.
///
/// The failure is logged rather than returned so that callers never observe a partially loaded
/// sequence.
pub fn load_or_empty<S: TransactionSource + ?Sized>(source: &S) -> Vec<Transaction> {
    match source.load() {
        Ok(transactions) => {
            info!("Loaded {} transactions", transactions.len());
            transactions
        }
        Err(error) => {
            error!("Transaction load failed, continuing with no transactions | {error}");
            Vec::new()
        }
    }
}

use crate::models::Transaction;
use crate::storage::{LoadError, TransactionSource};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Reads a JSON array of transaction objects.
pub struct JsonFileSource {
    path: PathBuf
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Transaction>, LoadError> {
        let file = open(&self.path)?;

        debug!("Reading JSON transactions from {}", self.path.display());

        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
            path: self.path.clone(),
            source
        })
    }
}

/// Reads a CSV file whose header row uses the same column names as the JSON fields.
pub struct CsvFileSource {
    path: PathBuf
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionSource for CsvFileSource {
    fn load(&self) -> Result<Vec<Transaction>, LoadError> {
        let file = open(&self.path)?;

        debug!("Reading CSV transactions from {}", self.path.display());

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let mut transactions = Vec::new();

        for result in reader.deserialize::<Transaction>() {
            match result {
                Ok(transaction) => transactions.push(transaction),
                Err(source) => {
                    //NOTE: A single bad row rejects the whole file, the engine never sees a partial load
                    error!("CSV deserialization error: {source}");
                    return Err(LoadError::Csv { path: self.path.clone(), source })
                }
            }
        }

        Ok(transactions)
    }
}

/// A file source whose format is chosen by the file extension.
pub enum FileSource {
    Json(JsonFileSource),
    Csv(CsvFileSource)
}

impl FileSource {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let extension = path.extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(FileSource::Json(JsonFileSource::new(path))),
            Some("csv") => Ok(FileSource::Csv(CsvFileSource::new(path))),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf()))
        }
    }
}

impl TransactionSource for FileSource {
    fn load(&self) -> Result<Vec<Transaction>, LoadError> {
        match self {
            FileSource::Json(source) => source.load(),
            FileSource::Csv(source) => source.load()
        }
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source
    })
}

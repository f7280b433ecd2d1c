use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no valid rows found")]
    NoRows,
}

pub type Result<T> = std::result::Result<T, CsvError>;

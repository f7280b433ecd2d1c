use leadboard_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("database schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: i64, supported: i64 },
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("store lock poisoned")]
    Poisoned,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Sql,
    Serialization,
    Core,
    MissingHomeDir,
    UnsupportedSchema,
    InvalidDataPath,
    Poisoned,
    Unavailable,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::Serialization(_) => StoreErrorKind::Serialization,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::UnsupportedSchema { .. } => StoreErrorKind::UnsupportedSchema,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::Poisoned => StoreErrorKind::Poisoned,
            StoreError::Unavailable(_) => StoreErrorKind::Unavailable,
        }
    }

    /// Faults of the storage medium, as opposed to rejected input.
    pub fn is_persistence_fault(&self) -> bool {
        matches!(
            self.kind(),
            StoreErrorKind::Io
                | StoreErrorKind::Sql
                | StoreErrorKind::Serialization
                | StoreErrorKind::Unavailable
        )
    }
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("lead name is required")]
    EmptyName,
    #[error("interaction description is required")]
    EmptyInteractionDescription,
    #[error("invalid lead status: {0}")]
    InvalidStatus(String),
    #[error("invalid interaction kind: {0}")]
    InvalidInteractionKind(String),
}

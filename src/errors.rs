use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the strokes-gained engine and its persistence collaborators.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Raw input could not be turned into a usable value (bad distance, missing selection).
    #[error("Invalid input: {0}")]
    Validation(String),
    /// The operation is not allowed in the ledger's current state.
    #[error("Operation not allowed: {0}")]
    Precondition(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, CoreError>;

impl CoreError {
    /// True for errors caused by user input or ledger state rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, CoreError::Validation(_) | CoreError::Precondition(_))
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}

use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the storage, configuration, and catalog layers.
///
/// Field validation failures are not represented here: they are plain
/// messages collected by the wizard and never abort an operation.
#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, InquiryError>;

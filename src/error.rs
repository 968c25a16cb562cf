// src/error.rs

//! Error types for the procurement engine.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, ProcurementError>;

#[derive(Error, Debug)]
pub enum ProcurementError {
    /// A supplier, shortage or hospital record failed validation.
    #[error("invalid input for {record}: {reason}")]
    InvalidInput { record: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProcurementError {
    pub fn invalid(record: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            record: record.into(),
            reason: reason.into(),
        }
    }
}

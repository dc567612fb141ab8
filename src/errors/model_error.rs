//! Estimator-related error types.

use thiserror::Error;

/// Errors that can occur while building, training, or evaluating a regressor.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Regressor has no feature columns defined")]
    NoFeatureColumns,

    #[error("Regressor has no hidden layers defined")]
    NoHiddenLayers,

    #[error("Ragged row: expected {expected} values, got {actual}")]
    RaggedRow { expected: usize, actual: usize },

    #[error("Row count mismatch: {examples} example rows vs {targets} target rows")]
    RowCountMismatch { examples: usize, targets: usize },

    #[error("Feature columns do not match the regressor: expected {expected:?}, got {actual:?}")]
    FeatureColumnMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Table has no rows")]
    EmptyTable,

    #[error("Invalid training schedule: {message}")]
    InvalidSchedule { message: String },

    #[error("Checkpoint error: {message}")]
    Checkpoint { message: String },

    #[error("Tensor readback error: {message}")]
    TensorData { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

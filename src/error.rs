// File: src/error.rs
use thiserror::Error;

/// Every failure the prediction core can surface to its caller.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Dataset missing, unreadable or malformed at startup.
    #[error("failed to load reference dataset: {message}")]
    DataLoad { message: String },

    /// Fewer than two distinct disease labels to train on.
    #[error("insufficient training data: {message}")]
    InsufficientData { message: String },

    /// Blank symptom text. Recoverable, the caller should re-prompt.
    #[error("symptom text is empty")]
    EmptyInput,

    /// `predict` called on a pipeline that was never fitted.
    #[error("inference pipeline has not been fitted")]
    NotFitted,

    /// Predicted label has no guidance entry in the reference store.
    #[error("no reference entry for disease '{disease}'")]
    UnknownDisease { disease: String },

    /// Invalid hyperparameters or unreadable config file.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl CheckerError {
    pub fn data_load(message: impl Into<String>) -> Self {
        Self::DataLoad { message: message.into() }
    }

    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::InsufficientData { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// True for errors the caller can fix by changing the query.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

impl From<csv::Error> for CheckerError {
    fn from(err: csv::Error) -> Self {
        Self::data_load(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;

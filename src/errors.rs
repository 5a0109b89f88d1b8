use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0} Not found")]
    NotFound(String),

    /// `update` was called without naming the contact being edited.
    #[error("No contact selected for editing")]
    NoSelection,

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contact document: {0}")]
    Json(#[from] serde_json::Error),

    // csv::Error already prefixes its own messages
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// True for failures of the storage medium itself, as opposed to
    /// rejected input.
    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Json(_) | AppError::Csv(_))
    }
}

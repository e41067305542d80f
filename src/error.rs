use thiserror::Error;

/// Main error type for the menu app
#[derive(Error, Debug)]
pub enum MenuError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    // Form submission errors
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for MenuError
pub type Result<T> = std::result::Result<T, MenuError>;

/// Rejected dish-form input. Never mutates the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid price {raw:?}: {reason}")]
    InvalidPrice { raw: String, reason: String },
}

/// Fieldless discriminant of [`ValidationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MissingField,
    InvalidPrice,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationKind {
        match self {
            ValidationError::MissingField { .. } => ValidationKind::MissingField,
            ValidationError::InvalidPrice { .. } => ValidationKind::InvalidPrice,
        }
    }

    /// Message shown to the user as a blocking notification
    pub fn notification(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "Please fill all fields",
            ValidationError::InvalidPrice { .. } => "Please enter a valid price",
        }
    }
}

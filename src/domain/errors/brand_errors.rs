use crate::domain::{errors::ValidationError, value_objects::BrandId};

/// Errors surfaced by brand lifecycle operations
#[derive(Debug, Clone, PartialEq)]
pub enum BrandError {
    /// The supplied name or id violates its shape constraints
    InvalidInput { message: String },

    /// No live brand exists for the id
    NotFound { id: BrandId },

    /// The repository could not complete the operation
    StorageFailure { message: String },
}

impl BrandError {
    pub fn storage(message: impl Into<String>) -> Self {
        BrandError::StorageFailure {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for BrandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            BrandError::NotFound { id } => write!(f, "Brand not found with id: {}", id),
            BrandError::StorageFailure { message } => write!(f, "Storage failure: {}", message),
        }
    }
}

impl std::error::Error for BrandError {}

impl From<ValidationError> for BrandError {
    fn from(err: ValidationError) -> Self {
        BrandError::InvalidInput {
            message: err.to_string(),
        }
    }
}

/// Result type for brand operations
pub type BrandResult<T> = Result<T, BrandError>;

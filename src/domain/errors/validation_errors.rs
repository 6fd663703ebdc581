/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // BrandName validation errors
    EmptyBrandName,
    BrandNameTooLong { actual: usize, max: usize },

    // BrandId validation errors
    InvalidBrandId(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyBrandName => write!(f, "Brand name cannot be blank"),
            ValidationError::BrandNameTooLong { actual, max } => {
                write!(
                    f,
                    "Brand name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::InvalidBrandId(value) => {
                write!(f, "Invalid brand id: '{}'", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

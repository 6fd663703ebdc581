use crate::domain::errors::ValidationError;

/// A validated, trimmed brand name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrandName(String);

impl BrandName {
    /// Maximum length in characters, counted after trimming
    pub const MAX_LENGTH: usize = 120;

    /// Create a new BrandName, trimming surrounding whitespace first
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyBrandName);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::BrandNameTooLong {
                actual: length,
                max: Self::MAX_LENGTH,
            });
        }

        // Avoid reallocating when nothing was trimmed
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Get the brand name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for BrandName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        BrandName::new(value.to_string())
    }
}

impl std::fmt::Display for BrandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

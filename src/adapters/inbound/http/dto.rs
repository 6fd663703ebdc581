use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{
    errors::{BrandError, ValidationError},
    models::{Brand, CreateBrandRequest, UpdateBrandRequest},
    value_objects::BrandName,
};

/// DTO for creating or replacing a brand
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandRequestDto {
    // A missing or null name is validated as blank
    #[serde(default)]
    pub name: Option<String>,
}

impl BrandRequestDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// DTO for brand responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandResponseDto {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
    pub timestamp: DateTime<Utc>,
}

// Conversion implementations

impl TryFrom<BrandRequestDto> for BrandName {
    type Error = ValidationError;

    fn try_from(dto: BrandRequestDto) -> Result<Self, Self::Error> {
        BrandName::new(dto.name.unwrap_or_default())
    }
}

impl TryFrom<BrandRequestDto> for CreateBrandRequest {
    type Error = ValidationError;

    fn try_from(dto: BrandRequestDto) -> Result<Self, Self::Error> {
        Ok(CreateBrandRequest {
            name: dto.try_into()?,
        })
    }
}

impl TryFrom<BrandRequestDto> for UpdateBrandRequest {
    type Error = ValidationError;

    fn try_from(dto: BrandRequestDto) -> Result<Self, Self::Error> {
        Ok(UpdateBrandRequest {
            name: dto.try_into()?,
        })
    }
}

impl From<Brand> for BrandResponseDto {
    fn from(brand: Brand) -> Self {
        BrandResponseDto {
            id: *brand.id.as_uuid(),
            name: brand.name.into_inner(),
            created_at: brand.created_at,
            updated_at: brand.updated_at,
        }
    }
}

impl From<BrandError> for StatusCode {
    fn from(err: BrandError) -> Self {
        match err {
            BrandError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            BrandError::NotFound { .. } => StatusCode::NOT_FOUND,
            BrandError::StorageFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Error response helpers

impl ErrorResponseDto {
    pub fn from_brand_error(error: BrandError) -> Self {
        match &error {
            BrandError::InvalidInput { .. } => Self::bad_request(&error.to_string()),
            BrandError::NotFound { id } => {
                let mut details = HashMap::new();
                details.insert(
                    "id".to_string(),
                    serde_json::Value::String(id.to_string()),
                );

                ErrorResponseDto {
                    error: "Not Found".to_string(),
                    message: error.to_string(),
                    details: Some(details),
                    timestamp: Utc::now(),
                }
            }
            BrandError::StorageFailure { .. } => Self::internal_error(&error.to_string()),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        ErrorResponseDto {
            error: "Bad Request".to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        ErrorResponseDto {
            error: "Internal Server Error".to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::BrandId;

    #[test]
    fn test_request_dto_trims_name() {
        let request: CreateBrandRequest = BrandRequestDto::new("  Acme  ").try_into().unwrap();
        assert_eq!(request.name.as_str(), "Acme");
    }

    #[test]
    fn test_missing_name_is_blank() {
        let dto: BrandRequestDto = serde_json::from_str("{}").unwrap();
        let result: Result<UpdateBrandRequest, _> = dto.try_into();
        assert_eq!(result.unwrap_err(), ValidationError::EmptyBrandName);

        let dto: BrandRequestDto = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(CreateBrandRequest::try_from(dto).is_err());
    }

    #[test]
    fn test_status_codes() {
        let id = BrandId::generate();
        assert_eq!(
            StatusCode::from(BrandError::NotFound { id }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            StatusCode::from(BrandError::from(ValidationError::EmptyBrandName)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            StatusCode::from(BrandError::storage("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_error_body() {
        let id = BrandId::generate();
        let body = ErrorResponseDto::from_brand_error(BrandError::NotFound { id });

        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, format!("Brand not found with id: {}", id));
        assert_eq!(
            body.details.unwrap().get("id"),
            Some(&serde_json::Value::String(id.to_string()))
        );
    }
}

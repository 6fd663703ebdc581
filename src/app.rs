use std::sync::Arc;

use crate::{
    adapters::outbound::persistence::{InMemoryBrandRepository, SqlBrandRepository},
    ports::repositories::BrandRepository,
    services::BrandServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub repository_backend: RepositoryBackend,
}

/// Repository backend configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RepositoryBackend {
    #[default]
    InMemory,
    Sqlite {
        database_url: String,
    },
}

/// Application services container
pub struct AppServices {
    pub brand_service: BrandServiceImpl,
}

/// Application builder for dependency injection
#[derive(Default)]
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure repository backend
    pub fn with_repository_backend(mut self, backend: RepositoryBackend) -> Self {
        self.config.repository_backend = backend;
        self
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let repository = self.build_repository().await?;

        Ok(AppServices {
            brand_service: BrandServiceImpl::new(repository),
        })
    }

    /// Create the repository selected by the configuration
    pub async fn build_repository(&self) -> Result<Arc<dyn BrandRepository>, AppError> {
        match &self.config.repository_backend {
            RepositoryBackend::InMemory => Ok(Arc::new(InMemoryBrandRepository::new())),
            RepositoryBackend::Sqlite { database_url } => {
                let repository = SqlBrandRepository::connect(database_url)
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Failed to connect to {}: {}", database_url, e),
                    })?;

                repository
                    .migrate()
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Failed to migrate brand table: {}", e),
                    })?;

                Ok(Arc::new(repository))
            }
        }
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Repository initialization error: {message}")]
    RepositoryInit { message: String },
}

/// Create an in-memory application for testing and development
pub async fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(RepositoryBackend::InMemory)
        .build()
        .await
}

/// Create a SQLite-backed application
pub async fn create_sqlite_app(database_url: String) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(RepositoryBackend::Sqlite { database_url })
        .build()
        .await
}

/// Select a repository backend from its name and an optional database URL
///
/// No name selects the in-memory backend.
pub fn repository_backend_from(
    kind: Option<&str>,
    database_url: Option<String>,
) -> Result<RepositoryBackend, AppError> {
    match kind {
        None | Some("memory") => Ok(RepositoryBackend::InMemory),
        Some("sqlite") => {
            let database_url = database_url.ok_or_else(|| AppError::Configuration {
                message: "DATABASE_URL is required for the sqlite backend".to_string(),
            })?;
            Ok(RepositoryBackend::Sqlite { database_url })
        }
        Some(other) => Err(AppError::Configuration {
            message: format!("Unknown repository backend: {}", other),
        }),
    }
}

/// Read the repository backend from `REPOSITORY_BACKEND` and `DATABASE_URL`
pub fn repository_backend_from_env() -> Result<RepositoryBackend, AppError> {
    repository_backend_from(
        std::env::var("REPOSITORY_BACKEND").ok().as_deref(),
        std::env::var("DATABASE_URL").ok(),
    )
}

/// Create application from environment variables
pub async fn create_app_from_env() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_repository_backend(repository_backend_from_env()?)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{models::CreateBrandRequest, value_objects::BrandName},
        ports::services::BrandService,
    };

    #[tokio::test]
    async fn test_create_in_memory_app() {
        let app = create_in_memory_app().await.unwrap();

        let brands = app.brand_service.list_brands().await.unwrap();
        assert!(brands.is_empty());
    }

    #[tokio::test]
    async fn test_create_sqlite_app() {
        let app = create_sqlite_app("sqlite::memory:".to_string())
            .await
            .unwrap();

        let created = app
            .brand_service
            .create_brand(CreateBrandRequest {
                name: BrandName::new("Acme".to_string()).unwrap(),
            })
            .await
            .unwrap();

        let fetched = app.brand_service.get_brand(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_invalid_database_url() {
        let result = AppBuilder::new()
            .with_repository_backend(RepositoryBackend::Sqlite {
                database_url: "sqlite:///nonexistent-brand-dir/brands.db".to_string(),
            })
            .build()
            .await;

        assert!(matches!(result, Err(AppError::RepositoryInit { .. })));
    }

    #[test]
    fn test_backend_selection() {
        assert_eq!(
            repository_backend_from(None, None).unwrap(),
            RepositoryBackend::InMemory
        );
        assert_eq!(
            repository_backend_from(Some("memory"), Some("sqlite://ignored.db".to_string()))
                .unwrap(),
            RepositoryBackend::InMemory
        );
        assert_eq!(
            repository_backend_from(Some("sqlite"), Some("sqlite://brands.db".to_string()))
                .unwrap(),
            RepositoryBackend::Sqlite {
                database_url: "sqlite://brands.db".to_string()
            }
        );
    }

    #[test]
    fn test_backend_configuration_errors() {
        let missing_url = repository_backend_from(Some("sqlite"), None);
        assert!(matches!(missing_url, Err(AppError::Configuration { .. })));

        let unknown = repository_backend_from(Some("mongo"), None).unwrap_err();
        assert!(matches!(unknown, AppError::Configuration { .. }));
        assert_eq!(
            unknown.to_string(),
            "Configuration error: Unknown repository backend: mongo"
        );
    }

    #[test]
    fn test_default_config_is_in_memory() {
        assert_eq!(
            AppConfig::default().repository_backend,
            RepositoryBackend::InMemory
        );
    }
}

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    // Models
    Brand,
    // Errors
    BrandError,
    // Value objects
    BrandId,
    BrandName,
    BrandResult,
    CreateBrandRequest,
    UpdateBrandRequest,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{BrandRepository, BrandService};

// Service implementations - business logic
pub use services::{BrandServiceBuilder, BrandServiceImpl};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppError, AppServices, RepositoryBackend, create_app_from_env,
    create_in_memory_app, create_sqlite_app, repository_backend_from,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::persistence::{InMemoryBrandRepository, SqlBrandRepository};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, Brand, BrandError, BrandId, BrandName, BrandRepository,
        BrandService, BrandServiceImpl, CreateBrandRequest, InMemoryBrandRepository,
        SqlBrandRepository, UpdateBrandRequest, create_in_memory_app, create_sqlite_app,
    };
}

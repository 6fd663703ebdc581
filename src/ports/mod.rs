pub mod repositories;
pub mod services;

// Re-export all port traits for convenience
pub use repositories::BrandRepository;
pub use services::BrandService;

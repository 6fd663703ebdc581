mod brand_service;

pub use brand_service::BrandService;

mod brand_repository;

pub use brand_repository::BrandRepository;

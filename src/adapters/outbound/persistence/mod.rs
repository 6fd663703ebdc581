mod in_memory_brand_repository;
mod sql_brand_repository;

pub use in_memory_brand_repository::InMemoryBrandRepository;
pub use sql_brand_repository::SqlBrandRepository;

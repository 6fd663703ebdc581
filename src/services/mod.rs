mod brand_service_impl;

pub use brand_service_impl::{BrandServiceBuilder, BrandServiceImpl};

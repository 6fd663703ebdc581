mod brand_id;
mod brand_name;

pub use brand_id::BrandId;
pub use brand_name::BrandName;

pub mod brand_handlers;

pub use brand_handlers::*;

mod brand_errors;
mod validation_errors;

pub use brand_errors::*;
pub use validation_errors::*;

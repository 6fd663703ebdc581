pub mod brand;

pub use brand::*;

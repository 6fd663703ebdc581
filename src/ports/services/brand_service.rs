use crate::domain::{
    errors::BrandResult,
    models::{Brand, CreateBrandRequest, UpdateBrandRequest},
    value_objects::BrandId,
};
use async_trait::async_trait;

/// Port for brand lifecycle operations
/// This trait defines the business rules for creating, reading, updating and deleting brands
#[async_trait]
pub trait BrandService: Send + Sync + 'static {
    /// Create a brand with a fresh id and timestamps
    async fn create_brand(&self, request: CreateBrandRequest) -> BrandResult<Brand>;

    /// Get a brand, failing with `NotFound` if absent
    async fn get_brand(&self, id: &BrandId) -> BrandResult<Brand>;

    /// List all brands in no particular order
    async fn list_brands(&self) -> BrandResult<Vec<Brand>>;

    /// Replace the name of an existing brand
    async fn update_brand(&self, id: &BrandId, request: UpdateBrandRequest) -> BrandResult<Brand>;

    /// Permanently delete an existing brand
    async fn delete_brand(&self, id: &BrandId) -> BrandResult<()>;
}

use crate::domain::{errors::BrandResult, models::Brand, value_objects::BrandId};
use async_trait::async_trait;

/// Repository for persisting brands, keyed by their id
///
/// Implementations own their own synchronization. Each call is independent;
/// callers that check and then mutate are not protected against a concurrent
/// writer in between.
#[async_trait]
pub trait BrandRepository: Send + Sync + 'static {
    /// Insert or replace a brand by id
    async fn save(&self, brand: &Brand) -> BrandResult<Brand>;

    /// Retrieve a brand by id
    async fn find_by_id(&self, id: &BrandId) -> BrandResult<Option<Brand>>;

    /// Retrieve every stored brand
    async fn find_all(&self) -> BrandResult<Vec<Brand>>;

    /// Remove a brand; removing an absent id is a no-op
    async fn delete_by_id(&self, id: &BrandId) -> BrandResult<()>;
}

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    domain::{
        errors::{BrandError, BrandResult},
        models::{Brand, CreateBrandRequest, UpdateBrandRequest},
        value_objects::BrandId,
    },
    ports::{repositories::BrandRepository, services::BrandService},
};

/// Implementation of BrandService on top of a BrandRepository
///
/// Update and delete check for existence and then mutate in a second
/// repository call. A concurrent delete landing between the two is not
/// detected: a racing update re-inserts the record, a racing delete is a
/// no-op.
#[derive(Clone)]
pub struct BrandServiceImpl {
    repository: Arc<dyn BrandRepository>,
}

impl BrandServiceImpl {
    /// Create a new BrandServiceImpl instance
    pub fn new(repository: Arc<dyn BrandRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl BrandService for BrandServiceImpl {
    async fn create_brand(&self, request: CreateBrandRequest) -> BrandResult<Brand> {
        let brand = Brand::new(BrandId::generate(), request.name, Utc::now());

        let saved = self.repository.save(&brand).await?;

        info!(brand_id = %saved.id, name = %saved.name, "Created brand");
        Ok(saved)
    }

    async fn get_brand(&self, id: &BrandId) -> BrandResult<Brand> {
        debug!(brand_id = %id, "Fetching brand");

        match self.repository.find_by_id(id).await? {
            Some(brand) => Ok(brand),
            None => {
                warn!(brand_id = %id, "Brand not found");
                Err(BrandError::NotFound { id: *id })
            }
        }
    }

    async fn list_brands(&self) -> BrandResult<Vec<Brand>> {
        let brands = self.repository.find_all().await?;
        debug!(count = brands.len(), "Listed brands");
        Ok(brands)
    }

    async fn update_brand(&self, id: &BrandId, request: UpdateBrandRequest) -> BrandResult<Brand> {
        let mut brand = self.get_brand(id).await?;

        // Nothing is persisted unless the whole change is saved
        brand.rename(request.name, Utc::now());

        let saved = self.repository.save(&brand).await?;

        info!(brand_id = %saved.id, name = %saved.name, "Updated brand");
        Ok(saved)
    }

    async fn delete_brand(&self, id: &BrandId) -> BrandResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            warn!(brand_id = %id, "Brand not found");
            return Err(BrandError::NotFound { id: *id });
        }

        self.repository.delete_by_id(id).await?;

        info!(brand_id = %id, "Deleted brand");
        Ok(())
    }
}

/// Builder for BrandServiceImpl
#[derive(Default)]
pub struct BrandServiceBuilder {
    repository: Option<Arc<dyn BrandRepository>>,
}

impl BrandServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(mut self, repository: Arc<dyn BrandRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(self) -> Result<BrandServiceImpl, &'static str> {
        let repository = self.repository.ok_or("Repository is required")?;

        Ok(BrandServiceImpl::new(repository))
    }
}

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{errors::BrandResult, models::Brand, value_objects::BrandId},
    ports::repositories::BrandRepository,
};

/// In-memory implementation of BrandRepository for testing and development
#[derive(Clone, Default)]
pub struct InMemoryBrandRepository {
    // Map of brand id -> brand
    brands: Arc<RwLock<HashMap<Uuid, Brand>>>,
}

impl InMemoryBrandRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn save(&self, brand: &Brand) -> BrandResult<Brand> {
        let mut brands = self.brands.write().await;
        brands.insert(*brand.id.as_uuid(), brand.clone());
        Ok(brand.clone())
    }

    async fn find_by_id(&self, id: &BrandId) -> BrandResult<Option<Brand>> {
        let brands = self.brands.read().await;
        Ok(brands.get(id.as_uuid()).cloned())
    }

    async fn find_all(&self) -> BrandResult<Vec<Brand>> {
        let brands = self.brands.read().await;
        Ok(brands.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: &BrandId) -> BrandResult<()> {
        let mut brands = self.brands.write().await;
        brands.remove(id.as_uuid());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::BrandName;
    use chrono::Utc;

    fn brand(name: &str) -> Brand {
        Brand::new(
            BrandId::generate(),
            BrandName::new(name.to_string()).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryBrandRepository::new();
        let acme = brand("Acme");

        let saved = repo.save(&acme).await.unwrap();
        assert_eq!(saved, acme);

        let found = repo.find_by_id(&acme.id).await.unwrap();
        assert_eq!(found, Some(acme));
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repo = InMemoryBrandRepository::new();
        let mut acme = brand("Acme");
        repo.save(&acme).await.unwrap();

        acme.rename(BrandName::new("Acme Corp".to_string()).unwrap(), Utc::now());
        repo.save(&acme).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name.as_str(), "Acme Corp");
    }

    #[tokio::test]
    async fn test_delete_is_noop_when_absent() {
        let repo = InMemoryBrandRepository::new();
        let acme = brand("Acme");
        repo.save(&acme).await.unwrap();

        repo.delete_by_id(&acme.id).await.unwrap();
        repo.delete_by_id(&acme.id).await.unwrap();

        assert!(repo.find_by_id(&acme.id).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryBrandRepository::new();
        let other = repo.clone();
        let acme = brand("Acme");

        repo.save(&acme).await.unwrap();

        assert!(other.find_by_id(&acme.id).await.unwrap().is_some());
    }
}

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{BrandId, BrandName};

/// A catalog brand
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: BrandId,
    pub name: BrandName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    /// Create a brand stamped with a single instant for both timestamps
    pub fn new(id: BrandId, name: BrandName, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the name and refresh `updated_at`, never moving it before `created_at`
    pub fn rename(&mut self, name: BrandName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now.max(self.created_at);
    }
}

/// Request to create a new brand
#[derive(Debug, Clone)]
pub struct CreateBrandRequest {
    pub name: BrandName,
}

/// Request to replace the mutable fields of a brand
#[derive(Debug, Clone)]
pub struct UpdateBrandRequest {
    pub name: BrandName,
}

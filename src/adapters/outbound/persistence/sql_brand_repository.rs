use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    Row, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
};
use std::str::FromStr;

use crate::{
    domain::{
        errors::{BrandError, BrandResult},
        models::Brand,
        value_objects::{BrandId, BrandName},
    },
    ports::repositories::BrandRepository,
};

/// SQL-based implementation of BrandRepository using SQLite
#[derive(Clone)]
pub struct SqlBrandRepository {
    pool: SqlitePool,
}

impl SqlBrandRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, creating the database file if needed
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own empty database,
        // so keep exactly one connection alive for the lifetime of the pool
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };

        Ok(Self::new(pool))
    }

    /// Initialize database tables
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS brands (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_brand(row: &SqliteRow) -> BrandResult<Brand> {
        let id: String = row.try_get("id").map_err(Self::db_error("reading id"))?;
        let name: String = row.try_get("name").map_err(Self::db_error("reading name"))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(Self::db_error("reading created_at"))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(Self::db_error("reading updated_at"))?;

        let id = BrandId::parse(&id)
            .map_err(|e| BrandError::storage(format!("Corrupt brand row: {}", e)))?;
        let name = BrandName::new(name)
            .map_err(|e| BrandError::storage(format!("Corrupt brand row {}: {}", id, e)))?;

        Ok(Brand {
            id,
            name,
            created_at,
            updated_at,
        })
    }

    fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> BrandError {
        move |e| BrandError::storage(format!("Database error {}: {}", context, e))
    }
}

#[async_trait]
impl BrandRepository for SqlBrandRepository {
    async fn save(&self, brand: &Brand) -> BrandResult<Brand> {
        sqlx::query(
            r#"
            INSERT INTO brands (id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (id)
            DO UPDATE SET
                name = excluded.name,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(brand.id.to_string())
        .bind(brand.name.as_str())
        .bind(brand.created_at)
        .bind(brand.updated_at)
        .execute(&self.pool)
        .await
        .map_err(Self::db_error("saving brand"))?;

        Ok(brand.clone())
    }

    async fn find_by_id(&self, id: &BrandId) -> BrandResult<Option<Brand>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at
            FROM brands
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::db_error("retrieving brand"))?;

        row.as_ref().map(Self::row_to_brand).transpose()
    }

    async fn find_all(&self) -> BrandResult<Vec<Brand>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at
            FROM brands
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Self::db_error("listing brands"))?;

        rows.iter().map(Self::row_to_brand).collect()
    }

    async fn delete_by_id(&self, id: &BrandId) -> BrandResult<()> {
        sqlx::query("DELETE FROM brands WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(Self::db_error("deleting brand"))?;

        Ok(())
    }
}

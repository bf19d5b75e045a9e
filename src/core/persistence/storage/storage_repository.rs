use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::storage_api_repository_trait::StorageApiRepository;
use super::storage_entity::StorageEntity;

pub struct StorageRepository {
    pool: SqlitePool,
}

impl StorageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageApiRepository for StorageRepository {
    async fn list(&self) -> Result<Vec<StorageEntity>> {
        let rows = sqlx::query_as::<_, StorageEntity>("SELECT * FROM storages ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, storage: &StorageEntity) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO storages (extended_user_id, name, location, capacity_tons, price_per_ton, storage_type, is_available) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(storage.extended_user_id)
        .bind(&storage.name)
        .bind(&storage.location)
        .bind(storage.capacity_tons)
        .bind(storage.price_per_ton)
        .bind(&storage.storage_type)
        .bind(storage.is_available)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}

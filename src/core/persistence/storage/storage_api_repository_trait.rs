use anyhow::Result;
use async_trait::async_trait;

use super::storage_entity::StorageEntity;

#[async_trait]
pub trait StorageApiRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<StorageEntity>>;
    async fn insert(&self, storage: &StorageEntity) -> Result<i64>;
}

use anyhow::Result;
use async_trait::async_trait;

use super::farmer_detail_entity::FarmerDetailEntity;

#[async_trait]
pub trait FarmerDetailApiRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<FarmerDetailEntity>>;
    async fn find(&self, id: i64) -> Result<Option<FarmerDetailEntity>>;
    async fn insert(&self, detail: &FarmerDetailEntity) -> Result<i64>;
    async fn update(&self, detail: &FarmerDetailEntity) -> Result<()>;
}

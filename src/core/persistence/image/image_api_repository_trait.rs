use anyhow::Result;
use async_trait::async_trait;

use super::image_entity::ImageEntity;

#[async_trait]
pub trait ImageApiRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ImageEntity>>;
    async fn insert(&self, image: &ImageEntity) -> Result<i64>;
}

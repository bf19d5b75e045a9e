use anyhow::Result;
use async_trait::async_trait;

use super::land_agreement_entity::LandAgreementEntity;

#[async_trait]
pub trait LandAgreementApiRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<LandAgreementEntity>>;
    async fn find(&self, id: i64) -> Result<Option<LandAgreementEntity>>;
    async fn insert(&self, agreement: &LandAgreementEntity) -> Result<i64>;
    async fn update(&self, agreement: &LandAgreementEntity) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<bool>;
}

use anyhow::Result;
use async_trait::async_trait;

use super::session_entity::SessionEntity;

#[async_trait]
pub trait SessionApiRepository: Send + Sync {
    async fn insert(&self, session: &SessionEntity) -> Result<()>;
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A storage facility listed by its owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StorageEntity {
    pub id: i64,
    /// Owning ExtendedUser.
    pub extended_user_id: i64,
    pub name: String,
    pub location: String,
    pub capacity_tons: f64,
    pub price_per_ton: f64,
    pub storage_type: String,
    pub is_available: bool,
}

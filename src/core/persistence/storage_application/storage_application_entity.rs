use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A farmer's request to use a storage facility.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StorageApplicationEntity {
    pub id: i64,
    pub storage_id: i64,
    /// Applying farmer's ExtendedUser id.
    pub farmer_id: i64,
    pub crop_type: String,
    pub quantity_tons: f64,
    pub duration_months: i64,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

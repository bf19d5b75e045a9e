use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Server-side session record created at login.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionEntity {
    pub token: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

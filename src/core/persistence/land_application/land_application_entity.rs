use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::lease::dto::land_application_patch_request::LandApplicationPatchRequest;

pub const APPLICATION_STATUSES: [&str; 3] = ["pending", "approved", "rejected"];

/// A farmer's request to lease a specific land parcel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LandApplicationEntity {
    pub id: i64,
    pub land_id: i64,
    /// Applying farmer's ExtendedUser id.
    pub farmer_id: i64,
    pub proposed_rent: f64,
    pub duration_months: i64,
    pub message: String,
    /// pending, approved or rejected.
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

impl LandApplicationEntity {
    pub fn apply_update(&mut self, req: LandApplicationPatchRequest) {
        if let Some(proposed_rent) = req.proposed_rent {
            self.proposed_rent = proposed_rent;
        }
        if let Some(duration_months) = req.duration_months {
            self.duration_months = duration_months;
        }
        if let Some(message) = req.message {
            self.message = message;
        }
        if let Some(status) = req.status {
            self.status = status;
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::land::dto::land_patch_request::LandPatchRequest;

/// A parcel listed for lease by a landowner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LandEntity {
    pub id: i64,
    /// Owning ExtendedUser.
    pub extended_user_id: i64,
    pub title: String,
    pub location: String,
    pub area_acres: f64,
    pub soil_type: String,
    pub water_source: String,
    pub expected_rent: f64,
    pub description: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl LandEntity {
    pub fn apply_update(&mut self, req: LandPatchRequest) {
        if let Some(title) = req.title {
            self.title = title;
        }
        if let Some(location) = req.location {
            self.location = location;
        }
        if let Some(area_acres) = req.area_acres {
            self.area_acres = area_acres;
        }
        if let Some(soil_type) = req.soil_type {
            self.soil_type = soil_type;
        }
        if let Some(water_source) = req.water_source {
            self.water_source = water_source;
        }
        if let Some(expected_rent) = req.expected_rent {
            self.expected_rent = expected_rent;
        }
        if let Some(description) = req.description {
            self.description = description;
        }
        if let Some(is_available) = req.is_available {
            self.is_available = is_available;
        }
    }
}

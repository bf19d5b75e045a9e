use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::profile::dto::farmer_detail_patch_request::FarmerDetailPatchRequest;

/// Farmer-specific profile attributes linked to an ExtendedUser.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FarmerDetailEntity {
    pub id: i64,
    pub extended_user_id: i64,
    pub farm_size_acres: f64,
    pub experience_years: i64,
    /// Comma-separated crop names.
    pub preferred_crops: String,
}

impl FarmerDetailEntity {
    pub fn apply_update(&mut self, req: FarmerDetailPatchRequest) {
        if let Some(farm_size_acres) = req.farm_size_acres {
            self.farm_size_acres = farm_size_acres;
        }
        if let Some(experience_years) = req.experience_years {
            self.experience_years = experience_years;
        }
        if let Some(preferred_crops) = req.preferred_crops {
            self.preferred_crops = preferred_crops;
        }
    }
}

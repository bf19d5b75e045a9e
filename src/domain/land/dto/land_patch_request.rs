use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LandPatchRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 300))]
    pub location: Option<String>,

    #[validate(range(min = 0.01))]
    pub area_acres: Option<f64>,

    pub soil_type: Option<String>,
    pub water_source: Option<String>,

    #[validate(range(min = 0.0))]
    pub expected_rent: Option<f64>,

    pub description: Option<String>,
    pub is_available: Option<bool>,
}

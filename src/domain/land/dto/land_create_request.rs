use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LandCreateRequest {
    /// Owning ExtendedUser.
    #[validate(range(min = 1))]
    pub extended_user_id: i64,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 300))]
    pub location: String,

    #[validate(range(min = 0.01))]
    pub area_acres: f64,

    pub soil_type: Option<String>,
    pub water_source: Option<String>,

    #[validate(range(min = 0.0))]
    pub expected_rent: Option<f64>,

    pub description: Option<String>,
    pub is_available: Option<bool>,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LandApplicationCreateRequest {
    #[validate(range(min = 1))]
    pub land_id: i64,

    /// Applying farmer's ExtendedUser id.
    #[validate(range(min = 1))]
    pub farmer_id: i64,

    #[validate(range(min = 0.0))]
    pub proposed_rent: Option<f64>,

    #[validate(range(min = 1, max = 120))]
    pub duration_months: Option<i64>,

    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

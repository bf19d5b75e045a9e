use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FarmerDetailPatchRequest {
    #[validate(range(min = 0.0))]
    pub farm_size_acres: Option<f64>,

    #[validate(range(min = 0))]
    pub experience_years: Option<i64>,

    pub preferred_crops: Option<String>,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LandApplicationPatchRequest {
    #[validate(range(min = 0.0))]
    pub proposed_rent: Option<f64>,

    #[validate(range(min = 1, max = 120))]
    pub duration_months: Option<i64>,

    #[validate(length(max = 2000))]
    pub message: Option<String>,

    /// pending, approved or rejected.
    pub status: Option<String>,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StorageApplicationCreateRequest {
    #[validate(range(min = 1))]
    pub storage_id: i64,

    /// Applying farmer's ExtendedUser id.
    #[validate(range(min = 1))]
    pub farmer_id: i64,

    #[validate(length(max = 100))]
    pub crop_type: Option<String>,

    #[validate(range(min = 0.0))]
    pub quantity_tons: Option<f64>,

    #[validate(range(min = 1, max = 120))]
    pub duration_months: Option<i64>,
}

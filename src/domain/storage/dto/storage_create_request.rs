use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StorageCreateRequest {
    /// Owning ExtendedUser.
    #[validate(range(min = 1))]
    pub extended_user_id: i64,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 300))]
    pub location: String,

    #[validate(range(min = 0.0))]
    pub capacity_tons: Option<f64>,

    #[validate(range(min = 0.0))]
    pub price_per_ton: Option<f64>,

    pub storage_type: Option<String>,
    pub is_available: Option<bool>,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const PROFILE_ROLES: [&str; 2] = ["landowner", "farmer"];

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExtendedUserCreateRequest {
    #[validate(range(min = 1))]
    pub user_id: i64,

    /// "landowner" or "farmer"; checked against PROFILE_ROLES.
    #[validate(length(min = 1))]
    pub role: String,

    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
}

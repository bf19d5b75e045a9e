use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserRegistrationRequest {
    #[validate(length(min = 3, max = 150))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

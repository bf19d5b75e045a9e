use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::profile::dto::extended_user_patch_request::ExtendedUserPatchRequest;

/// Marketplace profile wrapping a base account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExtendedUserEntity {
    pub id: i64,
    pub user_id: i64,
    /// "landowner" or "farmer".
    pub role: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl ExtendedUserEntity {
    pub fn apply_update(&mut self, req: ExtendedUserPatchRequest) {
        if let Some(role) = req.role {
            self.role = role;
        }
        if let Some(phone_number) = req.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(address) = req.address {
            self.address = address;
        }
        if let Some(city) = req.city {
            self.city = city;
        }
        if let Some(state) = req.state {
            self.state = state;
        }
        if let Some(pincode) = req.pincode {
            self.pincode = pincode;
        }
    }
}

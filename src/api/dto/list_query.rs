//! Optional ownership filters for list endpoints.

use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct OwnerQuery {
    /// Base account id.
    pub user_id: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ProfileOwnerQuery {
    pub extended_user_id: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LandOwnerQuery {
    pub owner_id: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LandApplicationQuery {
    pub land_id: Option<i64>,
    pub farmer_id: Option<i64>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LandAgreementCreateRequest {
    #[validate(range(min = 1))]
    pub land_id: i64,

    #[validate(range(min = 1))]
    pub landowner_id: i64,

    #[validate(range(min = 1))]
    pub farmer_id: i64,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(range(min = 0.0))]
    pub rent_amount: Option<f64>,

    #[validate(length(max = 5000))]
    pub terms: Option<String>,
}

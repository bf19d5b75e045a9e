use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LandAgreementPatchRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    #[validate(range(min = 0.0))]
    pub rent_amount: Option<f64>,

    #[validate(length(max = 5000))]
    pub terms: Option<String>,
}

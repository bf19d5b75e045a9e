use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::lease::dto::land_agreement_patch_request::LandAgreementPatchRequest;

/// Finalized lease contract between a landowner and a farmer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LandAgreementEntity {
    pub id: i64,
    pub land_id: i64,
    pub landowner_id: i64,
    pub farmer_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rent_amount: f64,
    pub terms: String,
    pub signed_at: DateTime<Utc>,
}

impl LandAgreementEntity {
    pub fn apply_update(&mut self, req: LandAgreementPatchRequest) {
        if let Some(start_date) = req.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = req.end_date {
            self.end_date = end_date;
        }
        if let Some(rent_amount) = req.rent_amount {
            self.rent_amount = rent_amount;
        }
        if let Some(terms) = req.terms {
            self.terms = terms;
        }
    }

    /// True when the given ExtendedUser is a party to this agreement.
    pub fn involves(&self, extended_user_id: i64) -> bool {
        self.landowner_id == extended_user_id || self.farmer_id == extended_user_id
    }
}

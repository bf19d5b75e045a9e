use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of the dedicated status endpoint; nothing but the status may change.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LandApplicationStatusRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

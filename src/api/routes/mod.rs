//! API route declarations (e.g., /api/v1/*)

pub mod auth_routes;
pub mod land_routes;
pub mod lease_routes;
pub mod prediction_routes;
pub mod profile_routes;
pub mod storage_routes;

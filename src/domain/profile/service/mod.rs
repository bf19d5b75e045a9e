pub mod extended_user_service;
pub mod farmer_detail_service;

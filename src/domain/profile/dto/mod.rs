pub mod extended_user_create_request;
pub mod extended_user_patch_request;
pub mod farmer_detail_create_request;
pub mod farmer_detail_patch_request;

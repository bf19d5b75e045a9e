pub mod land_create_request;
pub mod land_patch_request;
pub mod uploaded_image;

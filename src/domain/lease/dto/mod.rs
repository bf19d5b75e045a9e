pub mod land_agreement_create_request;
pub mod land_agreement_patch_request;
pub mod land_application_create_request;
pub mod land_application_patch_request;
pub mod land_application_status_request;

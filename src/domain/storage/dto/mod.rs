pub mod storage_application_create_request;
pub mod storage_create_request;

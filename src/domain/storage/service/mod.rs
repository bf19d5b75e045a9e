pub mod storage_application_service;
pub mod storage_service;

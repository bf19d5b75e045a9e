pub mod storage_application_api_repository_trait;
pub mod storage_application_entity;
pub mod storage_application_repository;

pub mod storage_api_repository_trait;
pub mod storage_entity;
pub mod storage_repository;

pub mod session_api_repository_trait;
pub mod session_entity;
pub mod session_repository;

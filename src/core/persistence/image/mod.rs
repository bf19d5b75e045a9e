pub mod image_api_repository_trait;
pub mod image_entity;
pub mod image_repository;

pub mod land_api_repository_trait;
pub mod land_entity;
pub mod land_repository;

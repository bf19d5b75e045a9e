pub mod land_application_api_repository_trait;
pub mod land_application_entity;
pub mod land_application_repository;

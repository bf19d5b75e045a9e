pub mod extended_user_api_repository_trait;
pub mod extended_user_entity;
pub mod extended_user_repository;

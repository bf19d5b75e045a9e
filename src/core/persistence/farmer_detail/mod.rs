pub mod farmer_detail_api_repository_trait;
pub mod farmer_detail_entity;
pub mod farmer_detail_repository;

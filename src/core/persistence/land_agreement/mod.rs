pub mod land_agreement_api_repository_trait;
pub mod land_agreement_entity;
pub mod land_agreement_repository;

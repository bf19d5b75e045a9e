pub mod land_agreement_service;
pub mod land_application_service;

pub mod db;

pub mod extended_user;
pub mod farmer_detail;
pub mod image;
pub mod land;
pub mod land_agreement;
pub mod land_application;
pub mod session;
pub mod storage;
pub mod storage_application;
pub mod user;

pub mod user_login_request;
pub mod user_registration_request;

pub mod email_validator;
pub mod session_service;

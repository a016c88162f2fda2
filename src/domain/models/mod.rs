pub mod form;
pub mod password_policy;
pub mod registration;
pub mod user;

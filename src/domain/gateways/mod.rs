pub mod image_upload_gateway;
pub mod registration_gateway;

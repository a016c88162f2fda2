pub mod api_client;
pub mod file_storage;
pub mod http_image_upload_gateway;
pub mod http_registration_gateway;
pub mod in_memory_user_context;
pub mod regex_email_validator;
pub mod watch_navigator;

#[cfg(test)]
pub mod test_server;

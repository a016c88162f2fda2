use async_trait::async_trait;

use crate::domain::{
    error::GatewayError,
    models::{form::ProfileImage, user::ImageUrl},
};

/// Remote store for profile images
#[async_trait]
pub trait ImageUploadGateway {
    /// Upload the image. `Ok(None)` means the store accepted it but sent no URL back.
    async fn upload(&self, image: &ProfileImage) -> Result<Option<ImageUrl>, GatewayError>;
}

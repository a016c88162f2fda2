use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::{
    domain::{
        error::GatewayError,
        gateways::image_upload_gateway::ImageUploadGateway,
        models::{form::ProfileImage, user::ImageUrl},
    },
    infrastructure::api_client::{
        ApiClient, UPLOAD_IMAGE_PATH, invalid_request, read_json, transport_error,
    },
};

/// Multipart field the upload endpoint reads the file from
const IMAGE_FIELD: &str = "image";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    #[serde(default)]
    image_url: Option<ImageUrl>,
}

fn image_part(bytes: &[u8], file_name: &str, content_type: &str) -> Result<Part, GatewayError> {
    Part::bytes(bytes.to_vec())
        .file_name(file_name.to_string())
        .mime_str(content_type)
        .map_err(invalid_request)
}

#[derive(Clone)]
pub struct HttpImageUploadGateway {
    api: ApiClient,
    path: String,
}

impl HttpImageUploadGateway {
    pub fn new(api: ApiClient) -> Self {
        Self::with_path(api, UPLOAD_IMAGE_PATH)
    }

    pub fn with_path(api: ApiClient, path: impl Into<String>) -> Self {
        Self {
            api,
            path: path.into(),
        }
    }
}

#[async_trait]
impl ImageUploadGateway for HttpImageUploadGateway {
    async fn upload(&self, image: &ProfileImage) -> Result<Option<ImageUrl>, GatewayError> {
        let url = self.api.url(&self.path);
        debug!(%url, file_name = image.file_name(), "uploading image");

        let part = image_part(
            image.bytes(),
            image.file_name(),
            image.content_type().as_ref(),
        )?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .api
            .http()
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let body: UploadResponse = read_json(response).await?;
        Ok(body.image_url)
    }
}

use serde::{Deserialize, de::DeserializeOwned};

use crate::domain::error::GatewayError;

pub const REGISTER_PATH: &str = "/api/v1/auth/register";
pub const UPLOAD_IMAGE_PATH: &str = "/api/v1/auth/upload-image";

/// Shared HTTP client plus the API base URL the gateways resolve paths against
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Error body the API sends with non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub(crate) fn transport_error(error: reqwest::Error) -> GatewayError {
    GatewayError::Transport(error.to_string())
}

/// For failures while assembling a request, before anything is sent.
pub(crate) fn invalid_request(error: reqwest::Error) -> GatewayError {
    GatewayError::InvalidRequest(error.to_string())
}

/// Pass a 2xx response through, or turn anything else into
/// `GatewayError::Rejected` carrying the server's `message` when the body has one.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        return Err(GatewayError::Rejected {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

/// Decode a 2xx body as `T`; non-2xx as in [`check_status`].
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

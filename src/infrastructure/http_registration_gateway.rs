use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    domain::{
        error::GatewayError,
        gateways::registration_gateway::RegistrationGateway,
        models::registration::{RegistrationPayload, RegistrationResponse},
    },
    infrastructure::api_client::{ApiClient, REGISTER_PATH, check_status, transport_error},
};

#[derive(Clone)]
pub struct HttpRegistrationGateway {
    api: ApiClient,
    path: String,
}

impl HttpRegistrationGateway {
    pub fn new(api: ApiClient) -> Self {
        Self::with_path(api, REGISTER_PATH)
    }

    pub fn with_path(api: ApiClient, path: impl Into<String>) -> Self {
        Self {
            api,
            path: path.into(),
        }
    }
}

#[async_trait]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, GatewayError> {
        let url = self.api.url(&self.path);
        debug!(%url, "posting registration");

        let response = self
            .api
            .http()
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;

        let body = check_status(response)
            .await?
            .text()
            .await
            .map_err(transport_error)?;
        decode_response(&body)
    }
}

/// A 2xx body that is empty or not a JSON object carries no token, so it is
/// read as an empty response rather than an error.
fn decode_response(body: &str) -> Result<RegistrationResponse, GatewayError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string())),
        _ => {
            warn!(body_len = body.len(), "registration succeeded without a JSON body");
            Ok(RegistrationResponse::default())
        }
    }
}

use async_trait::async_trait;

use crate::domain::{
    error::GatewayError,
    models::registration::{RegistrationPayload, RegistrationResponse},
};

/// Remote endpoint that creates the account and opens a session
#[async_trait]
pub trait RegistrationGateway {
    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, GatewayError>;
}

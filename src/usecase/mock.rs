//! Hand-written fakes for the domain traits, shared by the usecase and
//! presentation tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::{
    error::{GatewayError, StorageError},
    gateways::{image_upload_gateway::ImageUploadGateway, registration_gateway::RegistrationGateway},
    models::{
        form::ProfileImage,
        registration::{RegistrationPayload, RegistrationResponse},
        user::{ImageUrl, UserRecord},
    },
    services::{
        email_validator::EmailValidator,
        session_service::{DurableStorage, Navigator, UserContextSink},
    },
};

/// Ordered record of every side effect the fakes saw
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|c| *c == call).count()
    }
}

pub fn test_user() -> UserRecord {
    UserRecord::new(
        "665f1c2e9b1e8a0012345678".to_string(),
        "Jane Doe".to_string(),
        "jane@example.com".to_string(),
        None,
    )
}

// email

#[derive(Clone)]
pub struct MockEmailValidator;

impl EmailValidator for MockEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        email.contains('@') && email.contains('.')
    }
}

// image upload

#[derive(Clone)]
pub enum UploadBehavior {
    Url(&'static str),
    NoUrl,
    Fail(Option<&'static str>),
    /// Wait for the notify before answering with the url
    Block(Arc<Notify>, &'static str),
}

#[derive(Clone)]
pub struct MockImageUploadGateway {
    calls: CallLog,
    behavior: UploadBehavior,
}

impl MockImageUploadGateway {
    pub fn new(calls: CallLog, behavior: UploadBehavior) -> Self {
        Self { calls, behavior }
    }
}

#[async_trait]
impl ImageUploadGateway for MockImageUploadGateway {
    async fn upload(&self, _image: &ProfileImage) -> Result<Option<ImageUrl>, GatewayError> {
        self.calls.push("upload");
        match &self.behavior {
            UploadBehavior::Url(url) => Ok(Some(url.to_string())),
            UploadBehavior::NoUrl => Ok(None),
            UploadBehavior::Fail(message) => Err(GatewayError::Rejected {
                status: 500,
                message: message.map(str::to_string),
            }),
            UploadBehavior::Block(notify, url) => {
                notify.notified().await;
                Ok(Some(url.to_string()))
            }
        }
    }
}

// registration

#[derive(Clone)]
pub enum RegisterBehavior {
    Token(&'static str),
    NoToken,
    TokenWithoutUser,
    Reject(&'static str),
    Transport,
}

#[derive(Clone)]
pub struct MockRegistrationGateway {
    calls: CallLog,
    behavior: RegisterBehavior,
    payloads: Arc<Mutex<Vec<RegistrationPayload>>>,
}

impl MockRegistrationGateway {
    pub fn new(calls: CallLog, behavior: RegisterBehavior) -> Self {
        Self {
            calls,
            behavior,
            payloads: Arc::default(),
        }
    }

    pub fn payloads(&self) -> Vec<RegistrationPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationGateway for MockRegistrationGateway {
    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationResponse, GatewayError> {
        self.calls.push("register");
        self.payloads.lock().unwrap().push(payload.clone());
        match &self.behavior {
            RegisterBehavior::Token(token) => Ok(RegistrationResponse {
                token: Some(token.to_string()),
                user: Some(test_user()),
            }),
            RegisterBehavior::NoToken => Ok(RegistrationResponse {
                token: None,
                user: Some(test_user()),
            }),
            RegisterBehavior::TokenWithoutUser => Ok(RegistrationResponse {
                token: Some("abc".to_string()),
                user: None,
            }),
            RegisterBehavior::Reject(message) => Err(GatewayError::Rejected {
                status: 400,
                message: Some(message.to_string()),
            }),
            RegisterBehavior::Transport => {
                Err(GatewayError::Transport("connection refused".to_string()))
            }
        }
    }
}

// session sinks

#[derive(Clone)]
pub struct MockStorage {
    calls: CallLog,
    items: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: bool,
}

impl MockStorage {
    pub fn new(calls: CallLog) -> Self {
        Self {
            calls,
            items: Arc::default(),
            fail_writes: false,
        }
    }

    pub fn failing(calls: CallLog) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(calls)
        }
    }
}

impl DurableStorage for MockStorage {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.calls.push("storage");
        if self.fail_writes {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().unwrap().get(key).cloned())
    }
}

#[derive(Clone)]
pub struct MockUserContext {
    calls: CallLog,
    users: Arc<Mutex<Vec<UserRecord>>>,
}

impl MockUserContext {
    pub fn new(calls: CallLog) -> Self {
        Self {
            calls,
            users: Arc::default(),
        }
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.users.lock().unwrap().clone()
    }
}

impl UserContextSink for MockUserContext {
    fn update_user(&self, user: UserRecord) {
        self.calls.push("user");
        self.users.lock().unwrap().push(user);
    }
}

#[derive(Clone)]
pub struct MockNavigator {
    calls: CallLog,
    routes: Arc<Mutex<Vec<String>>>,
}

impl MockNavigator {
    pub fn new(calls: CallLog) -> Self {
        Self {
            calls,
            routes: Arc::default(),
        }
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for MockNavigator {
    fn navigate(&self, route: &str) {
        self.calls.push("navigate");
        self.routes.lock().unwrap().push(route.to_string());
    }
}

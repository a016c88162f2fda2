use std::{path::PathBuf, time::Duration};

use thiserror::Error;

use crate::{
    domain::models::registration::DEFAULT_AVATAR_URL,
    infrastructure::api_client::{REGISTER_PATH, UPLOAD_IMAGE_PATH},
};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_STORAGE_PATH: &str = "signup-storage.json";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Settings for the HTTP-backed signup client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub register_path: String,
    pub upload_image_path: String,
    pub default_avatar_url: String,
    pub storage_path: PathBuf,
    pub request_timeout: Duration,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            register_path: REGISTER_PATH.to_string(),
            upload_image_path: UPLOAD_IMAGE_PATH.to_string(),
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `.env` if there is one, then the `SIGNUP_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup("SIGNUP_API_BASE_URL") {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    key: "SIGNUP_API_BASE_URL",
                    value: url,
                });
            }
            config.api_base_url = url;
        }
        if let Some(path) = lookup("SIGNUP_REGISTER_PATH") {
            config.register_path = path;
        }
        if let Some(path) = lookup("SIGNUP_UPLOAD_IMAGE_PATH") {
            config.upload_image_path = path;
        }
        if let Some(url) = lookup("SIGNUP_DEFAULT_AVATAR_URL") {
            config.default_avatar_url = url;
        }
        if let Some(path) = lookup("SIGNUP_STORAGE_PATH") {
            config.storage_path = PathBuf::from(path);
        }
        if let Some(secs) = lookup("SIGNUP_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => Duration::from_secs(n),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "SIGNUP_REQUEST_TIMEOUT_SECS",
                        value: secs,
                    });
                }
            };
        }
        if let Some(level) = lookup("SIGNUP_LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::models::user::{ImageUrl, UserRecord};

/// Avatar used when no image was picked or the upload returned no URL.
pub const DEFAULT_AVATAR_URL: &str = "/assets/default-avatar.jpg";

/// Body of the registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub profile_image_url: ImageUrl,
}

/// Decoded success body of the registration endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

impl RegistrationResponse {
    /// Token, unless missing or empty.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
    user: UserRecord,
}

impl Session {
    pub fn new(token: String, user: UserRecord) -> Self {
        Self { token, user }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &UserRecord {
        &self.user
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = String;
pub type ImageUrl = String;

/// User as returned by the registration endpoint.
///
/// Every field is optional: a success body with a token and a partial user
/// still signs the user in. Fields this client does not know about are kept
/// in `extra` so the user-context sink receives the record exactly as the
/// server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile_image_url: Option<ImageUrl>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl UserRecord {
    pub fn new(id: UserId, full_name: String, email: String, profile_image_url: Option<ImageUrl>) -> Self {
        Self {
            id: Some(id),
            full_name: Some(full_name),
            email: Some(email),
            profile_image_url,
            extra: serde_json::Map::new(),
        }
    }

    // getters only
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    pub fn profile_image_url(&self) -> Option<&str> {
        self.profile_image_url.as_deref()
    }
    /// `createdAt`, when present and RFC 3339.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("createdAt")
    }
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("updatedAt")
    }
    pub fn extra(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra
    }

    // timestamps stay in `extra` so an unexpected format never fails the decode
    fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        let raw = self.extra.get(key)?.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|at| at.with_timezone(&Utc))
    }
}

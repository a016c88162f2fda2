use crate::domain::{error::StorageError, models::user::UserRecord};

/// Storage key the session token is written under
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Route requested after a successful signup
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Client-side key/value storage that survives restarts
pub trait DurableStorage {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Holder of the application's current user
pub trait UserContextSink {
    fn update_user(&self, user: UserRecord);
}

pub trait Navigator {
    fn navigate(&self, route: &str);
}

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::domain::{models::user::UserRecord, services::session_service::UserContextSink};

/// Process-wide current user, shared by clones
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserContext {
    current: Arc<RwLock<Option<UserRecord>>>,
}

impl InMemoryUserContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl UserContextSink for InMemoryUserContext {
    fn update_user(&self, user: UserRecord) {
        debug!(user_id = ?user.id(), "current user updated");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }
}

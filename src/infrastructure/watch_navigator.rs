use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::domain::services::session_service::Navigator;

/// Publishes requested routes on a watch channel for the app shell's router.
#[derive(Debug, Clone)]
pub struct WatchNavigator {
    tx: Arc<watch::Sender<Option<String>>>,
}

impl WatchNavigator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }

    /// Last route requested, if any.
    pub fn current_route(&self) -> Option<String> {
        self.tx.borrow().clone()
    }
}

impl Default for WatchNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for WatchNavigator {
    fn navigate(&self, route: &str) {
        info!(route, "navigation requested");
        self.tx.send_replace(Some(route.to_string()));
    }
}

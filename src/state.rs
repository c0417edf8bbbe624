use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::Store;
use crate::services::{JournalService, UserService};

/// Shared handler state: the store plus the configuration it was built with
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn journal(&self) -> JournalService {
        JournalService::new(self.store.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.store.clone())
    }
}

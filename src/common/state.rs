// Application state shared across all modules

use std::sync::Arc;

use crate::common::config::AppConfig;
use crate::users::UserStore;

/// Application state containing configuration and the user store
///
/// Built once at startup and shared read-only through an `Extension` layer.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(config: AppConfig, users: Arc<dyn UserStore>) -> Self {
        Self {
            config: Arc::new(config),
            users,
        }
    }
}

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::AuthService;

/// Shared application state, available to handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(config: AppConfig, auth: AuthService) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
        }
    }
}

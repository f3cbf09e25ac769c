use crate::config::AppConfig;
use crate::gatekeeper::Gatekeeper;
use crate::services::Services;

/// Shared application state, cloned into every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub services: Services,
    /// Largest request body the gate will buffer
    pub body_limit: usize,
}

impl AppState {
    pub fn new(services: Services, config: &AppConfig) -> Self {
        Self {
            services,
            body_limit: config.api.max_request_size_bytes,
        }
    }

    pub fn gatekeeper(&self) -> Gatekeeper {
        Gatekeeper::new(self.services.clone())
    }
}

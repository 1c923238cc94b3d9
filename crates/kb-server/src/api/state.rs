//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use kb_application::KnowledgeServiceInterface;
use kb_domain::error::Error;
use kb_infrastructure::config::ServerConfig;

use super::error::{ApiError, api_error};

/// State managed by Rocket and borrowed by every handler
#[derive(Clone)]
pub struct ApiState {
    /// Ingestion, search and document management
    pub service: Arc<dyn KnowledgeServiceInterface>,
    /// HTTP settings the handlers consult (upload filter, error details)
    pub server: ServerConfig,
    /// Start-up instant for uptime reporting
    pub started_at: Instant,
}

impl ApiState {
    /// Create state for a freshly started server
    pub fn new(service: Arc<dyn KnowledgeServiceInterface>, server: ServerConfig) -> Self {
        Self {
            service,
            server,
            started_at: Instant::now(),
        }
    }

    /// Seconds since start-up
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Render a domain error under this server's detail policy
    pub fn fail(&self, error: &Error) -> ApiError {
        api_error(error, self.server.expose_error_details)
    }
}

//! Backend API configuration.

use serde::{Deserialize, Serialize};

/// Settings for reaching the counseling REST backend.
///
/// No request timeout is configured: calls are plain request/response
/// and failures surface immediately as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

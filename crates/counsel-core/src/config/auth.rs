//! Token cache configuration.

use serde::{Deserialize, Serialize};

/// Settings for the persistent bearer-token cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path of the file holding the raw bearer token between runs.
    #[serde(default = "default_token_path")]
    pub token_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
        }
    }
}

fn default_token_path() -> String {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => format!("{home}/.config/counselhub/token"),
        _ => ".counselhub-token".to_string(),
    }
}

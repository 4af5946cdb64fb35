//! Persistent bearer-token storage.

use std::path::PathBuf;

use counsel_core::config::auth::AuthConfig;
use counsel_core::error::AppError;

/// File-backed storage for the raw bearer token.
///
/// The process-lifetime token cache of the original client, made
/// durable across CLI invocations. A missing or unreadable file simply
/// reads as "not signed in".
#[derive(Debug, Clone)]
pub struct TokenCache {
    /// Location of the token file.
    path: PathBuf,
}

impl TokenCache {
    /// Creates a cache at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a cache at the configured location.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.token_path)
    }

    /// Loads the stored token, if any.
    pub fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(_) => None,
        }
    }

    /// Stores a token, creating parent directories as needed.
    pub fn store(&self, token: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::with_source(
                    counsel_core::error::ErrorKind::TokenCache,
                    format!("Failed to create token directory '{}': {e}", parent.display()),
                    e,
                )
            })?;
        }
        std::fs::write(&self.path, token).map_err(|e| {
            AppError::with_source(
                counsel_core::error::ErrorKind::TokenCache,
                format!("Failed to write token file '{}': {e}", self.path.display()),
                e,
            )
        })
    }

    /// Removes the stored token. Removing an absent token is fine.
    pub fn clear(&self) -> Result<(), AppError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                counsel_core::error::ErrorKind::TokenCache,
                format!("Failed to remove token file '{}': {e}", self.path.display()),
                e,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_cache(name: &str) -> TokenCache {
        let path = std::env::temp_dir()
            .join(format!("counselhub-test-{}", std::process::id()))
            .join(name);
        let cache = TokenCache::new(path);
        let _ = cache.clear();
        cache
    }

    #[test]
    fn test_missing_file_reads_as_signed_out() {
        let cache = scratch_cache("absent");
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn test_store_load_clear_roundtrip() {
        let cache = scratch_cache("roundtrip");
        cache.store("abc.def.ghi").expect("store");
        assert_eq!(cache.load().as_deref(), Some("abc.def.ghi"));
        cache.clear().expect("clear");
        assert_eq!(cache.load(), None);
        // Clearing twice must not error.
        cache.clear().expect("clear again");
    }

    #[test]
    fn test_load_trims_whitespace() {
        let cache = scratch_cache("trimmed");
        cache.store("token-value\n").expect("store");
        assert_eq!(cache.load().as_deref(), Some("token-value"));
    }
}

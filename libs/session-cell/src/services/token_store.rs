use std::fs;
use std::path::PathBuf;

use tracing::debug;

use shared_config::ApiConfig;
use shared_models::{ApiError, ApiResult};

use crate::models::StoredCredentials;

/// Persists `{ token, user }` as JSON at a fixed path, the client-side
/// equivalent of the browser's localStorage entry.
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            path: PathBuf::from(&config.credentials_path),
        }
    }

    pub fn load(&self) -> ApiResult<Option<StoredCredentials>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| ApiError::Storage(format!("reading {}: {}", self.path.display(), e)))?;
        let credentials = serde_json::from_str(&raw)
            .map_err(|e| ApiError::Storage(format!("parsing {}: {}", self.path.display(), e)))?;

        debug!("Loaded stored credentials from {}", self.path.display());
        Ok(Some(credentials))
    }

    pub fn save(&self, credentials: &StoredCredentials) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ApiError::Storage(format!("creating {}: {}", parent.display(), e)))?;
        }

        let raw = serde_json::to_string_pretty(credentials)
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        fs::write(&self.path, raw)
            .map_err(|e| ApiError::Storage(format!("writing {}: {}", self.path.display(), e)))?;

        debug!("Saved credentials to {}", self.path.display());
        Ok(())
    }

    pub fn clear(&self) -> ApiResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                ApiError::Storage(format!("removing {}: {}", self.path.display(), e))
            })?;
        }
        Ok(())
    }
}

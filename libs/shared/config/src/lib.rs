use std::env;
use tracing::warn;

/// Fallback API host used when `VITALINK_API_URL` is not provided.
pub const DEFAULT_API_URL: &str = "https://vitalink-backend-production.up.railway.app";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_base_url: String,
    pub credentials_path: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("VITALINK_API_URL")
                .unwrap_or_else(|_| {
                    warn!("VITALINK_API_URL not set, using default host");
                    DEFAULT_API_URL.to_string()
                }),
            credentials_path: env::var("VITALINK_CREDENTIALS_PATH")
                .unwrap_or_else(|_| {
                    warn!("VITALINK_CREDENTIALS_PATH not set, using default path");
                    default_credentials_path()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty() && !self.credentials_path.is_empty()
    }
}

fn default_credentials_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.vitalink/credentials.json", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_path_lands_under_home() {
        let path = default_credentials_path();
        assert!(path.ends_with("/.vitalink/credentials.json"));
    }
}

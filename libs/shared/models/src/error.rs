use thiserror::Error;

/// Error taxonomy for everything the client can observe: transport failures,
/// structured non-2xx API responses, missing/insufficient sessions, and
/// client-side input validation.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// True when the caller should be sent to the login flow.
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Auth(_))
            || matches!(self, ApiError::Api { status: 401 | 403, .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

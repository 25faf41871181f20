pub mod appointments;
pub mod auth;
pub mod dashboard;
pub mod discovery;
pub mod schedule;

use session_cell::session::Session;
use session_cell::token_store::TokenStore;
use shared_config::ApiConfig;
use shared_models::{ApiError, ApiResult};

/// Restored session plus its backing store, for commands that require login.
/// The bearer token is extracted at load time, so holding an `AuthedContext`
/// means a token exists.
#[derive(Debug)]
pub struct AuthedContext {
    pub session: Session,
    pub store: TokenStore,
    token: String,
}

impl AuthedContext {
    pub fn load(config: &ApiConfig) -> ApiResult<Self> {
        let store = TokenStore::new(config);
        let session = Session::restore(&store);
        session.require_authenticated()?;
        let token = session
            .token()
            .map(str::to_string)
            .ok_or_else(|| ApiError::Auth("faça login para continuar".to_string()))?;
        Ok(Self {
            session,
            store,
            token,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

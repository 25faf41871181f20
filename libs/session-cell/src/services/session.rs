use tracing::warn;

use shared_models::{ApiError, ApiResult, User, UserType};

use crate::models::StoredCredentials;
use crate::services::token_store::TokenStore;

/// The ambient "current user" of the original client, made an explicit
/// constructor-injected value instead of a hidden singleton. Holds only what
/// the auth collaborator issued: the token and a cached user snapshot.
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Restores the previous session from the credentials file, degrading to
    /// anonymous when the file is missing or unreadable.
    pub fn restore(store: &TokenStore) -> Self {
        match store.load() {
            Ok(Some(credentials)) => Self {
                current_user: Some(credentials.user),
                token: Some(credentials.token),
            },
            Ok(None) => Self::anonymous(),
            Err(e) => {
                warn!("Could not restore session: {}", e);
                Self::anonymous()
            }
        }
    }

    pub fn establish(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.current_user = Some(user);
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.current_user = None;
    }

    pub fn persist(&self, store: &TokenStore) -> ApiResult<()> {
        match (&self.token, &self.current_user) {
            (Some(token), Some(user)) => store.save(&StoredCredentials {
                token: token.clone(),
                user: user.clone(),
            }),
            _ => store.clear(),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.current_user.is_some()
    }

    /// Gate for authenticated screens; the error is the CLI's "redirect to
    /// login".
    pub fn require_authenticated(&self) -> ApiResult<&User> {
        self.current_user
            .as_ref()
            .filter(|_| self.token.is_some())
            .ok_or_else(|| ApiError::Auth("faça login para continuar".to_string()))
    }

    pub fn require_role(&self, role: UserType) -> ApiResult<&User> {
        let user = self.require_authenticated()?;
        if user.user_type != role {
            return Err(ApiError::Auth(format!(
                "esta área é exclusiva para contas do tipo {}",
                role
            )));
        }
        Ok(user)
    }

    pub fn require_patient(&self) -> ApiResult<&User> {
        self.require_role(UserType::Patient)
    }

    pub fn require_professional(&self) -> ApiResult<&User> {
        self.require_role(UserType::Professional)
    }
}

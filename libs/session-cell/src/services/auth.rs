use reqwest::Method;
use serde_json::json;
use tracing::debug;

use shared_config::ApiConfig;
use shared_http::RestClient;
use shared_models::{ApiError, ApiResult, User, UserType};

use crate::models::{
    AuthResponse, LoginRequest, ProfileResponse, ProfileUpdateRequest, RegisterRequest,
};

pub struct AuthService {
    client: RestClient,
}

impl AuthService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: RestClient::new(config),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "informe email e senha".to_string(),
            ));
        }

        debug!("Logging in {}", email);

        let body = json!(LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        });

        self.client
            .request(Method::POST, "/api/auth/login", None, Some(body))
            .await
    }

    pub async fn register(&self, request: RegisterRequest) -> ApiResult<AuthResponse> {
        validate_registration(&request)?;

        debug!("Registering {}", request.email);

        self.client
            .request(Method::POST, "/api/auth/register", None, Some(json!(request)))
            .await
    }

    /// Updates the banking/pricing block of the caller's profile and returns
    /// the fresh user snapshot for the session cache.
    pub async fn update_profile(
        &self,
        update: ProfileUpdateRequest,
        auth_token: &str,
    ) -> ApiResult<User> {
        debug!("Updating financial profile");

        let response: ProfileResponse = self
            .client
            .request(
                Method::PATCH,
                "/api/users/profile",
                Some(auth_token),
                Some(json!(update)),
            )
            .await?;

        Ok(response.user)
    }
}

/// Client-side checks mirrored from the registration form: required fields
/// and professional credentials when the account type demands them.
pub fn validate_registration(request: &RegisterRequest) -> ApiResult<()> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("nome é obrigatório".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(ApiError::Validation("email é obrigatório".to_string()));
    }
    if request.password.len() < 6 {
        return Err(ApiError::Validation(
            "a senha deve ter pelo menos 6 caracteres".to_string(),
        ));
    }

    match request.account_type {
        None => {
            return Err(ApiError::Validation(
                "selecione o tipo de conta".to_string(),
            ))
        }
        Some(UserType::Professional) => {
            if request.profession.as_deref().unwrap_or("").trim().is_empty() {
                return Err(ApiError::Validation(
                    "profissão é obrigatória para profissionais".to_string(),
                ));
            }
            if !request.online_service && !request.in_person_service && !request.home_service {
                return Err(ApiError::Validation(
                    "habilite ao menos um tipo de atendimento".to_string(),
                ));
            }
        }
        Some(UserType::Patient) => {}
    }

    Ok(())
}

/// Password confirmation check, kept separate because the confirmation field
/// never travels to the server.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ApiResult<()> {
    if password != confirmation {
        return Err(ApiError::Validation("as senhas não coincidem".to_string()));
    }
    Ok(())
}

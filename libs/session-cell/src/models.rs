use serde::{Deserialize, Serialize};

use shared_models::{User, UserType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Full onboarding payload. Patient registrations leave the professional
/// block at its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(default)]
    pub preferred_name: Option<String>,
    pub email: String,
    pub password: String,
    pub account_type: Option<UserType>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub complement: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub regulatory_body: Option<String>,
    #[serde(default)]
    pub regulatory_body_state: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub online_service: bool,
    #[serde(default)]
    pub online_price: Option<f64>,
    #[serde(default)]
    pub in_person_service: bool,
    #[serde(default)]
    pub in_person_price: Option<f64>,
    #[serde(default)]
    pub home_service: bool,
    #[serde(default)]
    pub home_price: Option<f64>,
}

/// `{ token, user }` issued by login and register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Financial/pricing profile update (professional only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    #[serde(default)]
    pub pix_key: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_agency: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub online_price: Option<f64>,
    #[serde(default)]
    pub in_person_price: Option<f64>,
    #[serde(default)]
    pub home_price: Option<f64>,
    #[serde(default)]
    pub online_enabled: Option<bool>,
    #[serde(default)]
    pub in_person_enabled: Option<bool>,
    #[serde(default)]
    pub home_enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// What the credentials file holds: the bearer token plus the cached user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub token: String,
    pub user: User,
}

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Patient,
    Professional,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Patient => write!(f, "patient"),
            UserType::Professional => write!(f, "professional"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Per-modality consultation prices and whether each modality is offered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default)]
    pub online: Option<f64>,
    #[serde(default)]
    pub in_person: Option<f64>,
    #[serde(default)]
    pub home: Option<f64>,
    #[serde(default)]
    pub online_enabled: bool,
    #[serde(default)]
    pub in_person_enabled: bool,
    #[serde(default)]
    pub home_enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Banking {
    #[serde(default)]
    pub pix_key: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_agency: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
}

/// Server-owned profile; the client holds a read-mostly cached copy next to
/// the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub preferred_name: Option<String>,
    pub user_type: UserType,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub regulatory_body: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub banking: Option<Banking>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.preferred_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_patient(&self) -> bool {
        self.user_type == UserType::Patient
    }

    pub fn is_professional(&self) -> bool {
        self.user_type == UserType::Professional
    }
}

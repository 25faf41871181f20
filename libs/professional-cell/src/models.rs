use serde::{Deserialize, Serialize};

use shared_models::Professional;

/// Discovery filters; empty fields are omitted from the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchFilters {
    pub search: Option<String>,
    pub specialty: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub min_rating: Option<f64>,
}

impl SearchFilters {
    /// Query pairs in a stable order, skipping unset and blank values.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let text = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        if let Some(search) = text(&self.search) {
            pairs.push(("search", search));
        }
        if let Some(specialty) = text(&self.specialty) {
            pairs.push(("specialty", specialty));
        }
        if let Some(state) = text(&self.state) {
            pairs.push(("state", state));
        }
        if let Some(city) = text(&self.city) {
            pairs.push(("city", city));
        }
        if let Some(min_rating) = self.min_rating {
            pairs.push(("min_rating", min_rating.to_string()));
        }

        pairs
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub professionals: Vec<Professional>,
}

#[derive(Debug, Deserialize)]
pub struct ProfessionalResponse {
    pub professional: Professional,
}

#[derive(Debug, Deserialize)]
pub struct FavoritesResponse {
    #[serde(default)]
    pub favorites: Vec<Professional>,
}

use reqwest::Method;
use tracing::debug;
use uuid::Uuid;

use shared_config::ApiConfig;
use shared_http::RestClient;
use shared_models::{ApiResult, Professional};

use crate::models::{ProfessionalResponse, SearchFilters, SearchResponse};

/// Professional discovery: filtered search and single-profile lookup.
pub struct DirectoryService {
    client: RestClient,
}

impl DirectoryService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: RestClient::new(config),
        }
    }

    /// Searches the directory. When the caller is themselves a professional,
    /// pass their id as `exclude` so their own profile never shows up in the
    /// results they browse.
    pub async fn search(
        &self,
        filters: &SearchFilters,
        exclude: Option<Uuid>,
        auth_token: Option<&str>,
    ) -> ApiResult<Vec<Professional>> {
        let pairs = filters.to_query_pairs();
        debug!("Searching professionals with {} filters", pairs.len());

        let response: SearchResponse = self
            .client
            .get_with_query("/api/professionals/search", &pairs, auth_token)
            .await?;

        let professionals = match exclude {
            Some(own_id) => response
                .professionals
                .into_iter()
                .filter(|p| p.id != own_id)
                .collect(),
            None => response.professionals,
        };

        Ok(professionals)
    }

    pub async fn get_professional(
        &self,
        professional_id: Uuid,
        auth_token: Option<&str>,
    ) -> ApiResult<Professional> {
        debug!("Fetching professional {}", professional_id);

        let path = format!("/api/professionals/{}", professional_id);
        let response: ProfessionalResponse = self
            .client
            .request(Method::GET, &path, auth_token, None)
            .await?;

        Ok(response.professional)
    }
}

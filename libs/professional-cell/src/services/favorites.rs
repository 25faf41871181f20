use reqwest::Method;
use tracing::debug;
use uuid::Uuid;

use shared_config::ApiConfig;
use shared_http::RestClient;
use shared_models::{ApiResult, Professional};

use crate::models::FavoritesResponse;

/// Patient-side favorites list. All operations require authentication.
pub struct FavoritesService {
    client: RestClient,
}

impl FavoritesService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: RestClient::new(config),
        }
    }

    pub async fn list(&self, auth_token: &str) -> ApiResult<Vec<Professional>> {
        debug!("Fetching favorites");

        let response: FavoritesResponse = self
            .client
            .request(Method::GET, "/api/reviews/favorites", Some(auth_token), None)
            .await?;

        Ok(response.favorites)
    }

    pub async fn add(&self, professional_id: Uuid, auth_token: &str) -> ApiResult<()> {
        debug!("Adding favorite {}", professional_id);

        let path = format!("/api/reviews/favorites/{}", professional_id);
        self.client
            .send(Method::POST, &path, Some(auth_token), None)
            .await
    }

    pub async fn remove(&self, professional_id: Uuid, auth_token: &str) -> ApiResult<()> {
        debug!("Removing favorite {}", professional_id);

        let path = format!("/api/reviews/favorites/{}", professional_id);
        self.client
            .send(Method::DELETE, &path, Some(auth_token), None)
            .await
    }

    /// Membership test for toggling the heart icon.
    pub fn is_favorite(favorites: &[Professional], professional_id: Uuid) -> bool {
        favorites.iter().any(|p| p.id == professional_id)
    }
}

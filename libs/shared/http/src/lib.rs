use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::ApiConfig;
use shared_models::{ApiError, ApiResult};

/// Thin JSON client for the marketplace API. The bearer token travels per
/// call; anonymous endpoints pass `None`.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_headers(&self, auth_token: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = auth_token {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        headers
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(method, path, auth_token, body).await?;
        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// GET with query parameters, serialized by reqwest.
    pub async fn get_with_query<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
        auth_token: Option<&str>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {} with {} query params", url, query.len());

        let response = self
            .client
            .get(&url)
            .headers(self.get_headers(auth_token))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = extract_error_message(&error_text);
            error!("API error ({}): {}", status, message);

            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Issues a request and discards the response body. Used for mutations
    /// whose payload the client never renders (the list is refetched instead).
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> ApiResult<()> {
        self.execute(method, path, auth_token, body).await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> ApiResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self
            .client
            .request(method, &url)
            .headers(self.get_headers(auth_token));

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = extract_error_message(&error_text);
            error!("API error ({}): {}", status, message);

            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

/// Non-2xx bodies are expected to carry `{ "error": string }`; anything else
/// is surfaced verbatim.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use professional_cell::{DirectoryService, FavoritesService, SearchFilters};
use shared_config::ApiConfig;
use shared_models::ApiError;
use shared_utils::fixtures::MockApiResponses;

fn test_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        api_base_url: server.uri(),
        credentials_path: "/tmp/vitalink-test-credentials.json".to_string(),
    }
}

#[tokio::test]
async fn search_sends_only_the_set_filters() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/api/professionals/search"))
        .and(query_param("specialty", "Cardiologia"))
        .and(query_param("state", "SP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockApiResponses::professionals_response(&[MockApiResponses::professional_body(
                id, "Dra. Ana",
            )]),
        ))
        .mount(&mock_server)
        .await;

    let directory = DirectoryService::new(&test_config(&mock_server));
    let filters = SearchFilters {
        specialty: Some("Cardiologia".to_string()),
        state: Some("SP".to_string()),
        search: Some("".to_string()),
        ..Default::default()
    };
    let results = directory.search(&filters, None, None).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Dra. Ana");
}

#[tokio::test]
async fn search_excludes_the_caller_from_the_results() {
    let mock_server = MockServer::start().await;
    let own_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/api/professionals/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockApiResponses::professionals_response(&[
                MockApiResponses::professional_body(own_id, "Eu Mesmo"),
                MockApiResponses::professional_body(other_id, "Dra. Ana"),
            ]),
        ))
        .mount(&mock_server)
        .await;

    let directory = DirectoryService::new(&test_config(&mock_server));
    let results = directory
        .search(&SearchFilters::default(), Some(own_id), Some("token"))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, other_id);
}

#[tokio::test]
async fn get_professional_unwraps_the_envelope() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/professionals/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "professional": MockApiResponses::professional_body(id, "Dra. Ana")
        })))
        .mount(&mock_server)
        .await;

    let directory = DirectoryService::new(&test_config(&mock_server));
    let prof = directory.get_professional(id, None).await.unwrap();

    assert_eq!(prof.id, id);
    assert_eq!(prof.average_rating, Some(4.8));
    assert_eq!(prof.total_reviews, 12);
}

#[tokio::test]
async fn unknown_professional_is_an_api_error() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/professionals/{}", id)))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(MockApiResponses::error_response("Profissional não encontrado")),
        )
        .mount(&mock_server)
        .await;

    let directory = DirectoryService::new(&test_config(&mock_server));
    let err = directory.get_professional(id, None).await.unwrap_err();

    assert!(matches!(err, ApiError::Api { status: 404, .. }));
}

#[tokio::test]
async fn favorites_crud_hits_the_reviews_endpoints() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/api/reviews/favorites"))
        .and(header("Authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockApiResponses::favorites_response(&[MockApiResponses::professional_body(
                id, "Dra. Ana",
            )]),
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/reviews/favorites/{}", id)))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/reviews/favorites/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = FavoritesService::new(&test_config(&mock_server));

    service.add(id, "token-123").await.unwrap();
    let favorites = service.list("token-123").await.unwrap();
    assert!(FavoritesService::is_favorite(&favorites, id));
    assert!(!FavoritesService::is_favorite(&favorites, Uuid::new_v4()));
    service.remove(id, "token-123").await.unwrap();
}

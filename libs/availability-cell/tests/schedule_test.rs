use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use availability_cell::{group_by_day, CreateSlotRequest, ScheduleService};
use shared_config::ApiConfig;
use shared_models::ApiError;
use shared_utils::fixtures::{self, MockApiResponses};

fn test_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        api_base_url: server.uri(),
        credentials_path: "/tmp/vitalink-test-credentials.json".to_string(),
    }
}

#[tokio::test]
async fn my_schedule_requires_the_bearer_token() {
    let mock_server = MockServer::start().await;
    let slots = vec![
        fixtures::slot(1, "09:00", "12:00"),
        fixtures::slot(3, "14:00", "18:00"),
    ];

    Mock::given(method("GET"))
        .and(path("/api/availability/my"))
        .and(header("Authorization", "Bearer token-123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockApiResponses::availability_response(&slots)),
        )
        .mount(&mock_server)
        .await;

    let service = ScheduleService::new(&test_config(&mock_server));
    let result = service.my_schedule("token-123").await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].day_of_week, 1);
}

#[tokio::test]
async fn professional_schedule_works_anonymously() {
    let mock_server = MockServer::start().await;
    let professional_id = Uuid::new_v4();
    let slots = vec![fixtures::slot(5, "08:00", "10:00")];

    Mock::given(method("GET"))
        .and(path(format!("/api/availability/{}", professional_id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockApiResponses::availability_response(&slots)),
        )
        .mount(&mock_server)
        .await;

    let service = ScheduleService::new(&test_config(&mock_server));
    let result = service
        .professional_schedule(professional_id, None)
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn create_slot_posts_the_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/availability/"))
        .and(body_json(json!({
            "day_of_week": 2,
            "start_time": "09:00",
            "end_time": "12:00"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = ScheduleService::new(&test_config(&mock_server));
    service
        .create_slot(
            CreateSlotRequest {
                day_of_week: 2,
                start_time: "09:00".to_string(),
                end_time: "12:00".to_string(),
            },
            "token-123",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn create_slot_rejects_inverted_and_malformed_windows() {
    let mock_server = MockServer::start().await;
    let service = ScheduleService::new(&test_config(&mock_server));

    let inverted = CreateSlotRequest {
        day_of_week: 2,
        start_time: "12:00".to_string(),
        end_time: "09:00".to_string(),
    };
    assert!(matches!(
        service.create_slot(inverted, "t").await.unwrap_err(),
        ApiError::Validation(_)
    ));

    let malformed = CreateSlotRequest {
        day_of_week: 2,
        start_time: "9h".to_string(),
        end_time: "12:00".to_string(),
    };
    assert!(matches!(
        service.create_slot(malformed, "t").await.unwrap_err(),
        ApiError::Validation(_)
    ));

    let bad_day = CreateSlotRequest {
        day_of_week: 7,
        start_time: "09:00".to_string(),
        end_time: "12:00".to_string(),
    };
    assert!(matches!(
        service.create_slot(bad_day, "t").await.unwrap_err(),
        ApiError::Validation(_)
    ));
}

#[tokio::test]
async fn delete_slot_targets_the_window_id() {
    let mock_server = MockServer::start().await;
    let slot_id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/availability/{}", slot_id)))
        .and(header("Authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = ScheduleService::new(&test_config(&mock_server));
    service.delete_slot(slot_id, "token-123").await.unwrap();
}

#[test]
fn group_by_day_keys_days_in_order() {
    let slots = vec![
        fixtures::slot(3, "14:00", "18:00"),
        fixtures::slot(1, "09:00", "12:00"),
        fixtures::slot(3, "08:00", "10:00"),
    ];

    let grouped = group_by_day(&slots);

    assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(grouped[&3].len(), 2);
    // Declaration order survives within a day.
    assert_eq!(grouped[&3][0].start_time, "14:00");
}

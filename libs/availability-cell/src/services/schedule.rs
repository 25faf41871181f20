use std::collections::BTreeMap;

use reqwest::Method;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_config::ApiConfig;
use shared_http::RestClient;
use shared_models::{ApiError, ApiResult, AvailabilitySlot};

use crate::models::{AvailabilityResponse, CreateSlotRequest};
use crate::services::expander::parse_hhmm;

/// Weekly recurring window management over the REST API. Mutations are
/// fire-then-refetch: callers reload the list instead of patching it.
pub struct ScheduleService {
    client: RestClient,
}

impl ScheduleService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: RestClient::new(config),
        }
    }

    /// The authenticated professional's own windows.
    pub async fn my_schedule(&self, auth_token: &str) -> ApiResult<Vec<AvailabilitySlot>> {
        debug!("Fetching own availability");

        let response: AvailabilityResponse = self
            .client
            .request(Method::GET, "/api/availability/my", Some(auth_token), None)
            .await?;

        Ok(response.availability)
    }

    /// A professional's windows as seen by a booking patient.
    pub async fn professional_schedule(
        &self,
        professional_id: Uuid,
        auth_token: Option<&str>,
    ) -> ApiResult<Vec<AvailabilitySlot>> {
        debug!("Fetching availability for professional {}", professional_id);

        let path = format!("/api/availability/{}", professional_id);
        let response: AvailabilityResponse = self
            .client
            .request(Method::GET, &path, auth_token, None)
            .await?;

        Ok(response.availability)
    }

    pub async fn create_slot(
        &self,
        request: CreateSlotRequest,
        auth_token: &str,
    ) -> ApiResult<()> {
        if request.day_of_week > 6 {
            return Err(ApiError::Validation(
                "dia da semana deve estar entre 0 (domingo) e 6 (sábado)".to_string(),
            ));
        }

        let start = parse_hhmm(&request.start_time)
            .ok_or_else(|| ApiError::Validation("horário de início inválido".to_string()))?;
        let end = parse_hhmm(&request.end_time)
            .ok_or_else(|| ApiError::Validation("horário de fim inválido".to_string()))?;
        if start >= end {
            return Err(ApiError::Validation(
                "o horário de início deve ser anterior ao de fim".to_string(),
            ));
        }

        debug!(
            "Creating availability slot: day {} {}-{}",
            request.day_of_week, request.start_time, request.end_time
        );

        self.client
            .send(
                Method::POST,
                "/api/availability/",
                Some(auth_token),
                Some(json!(request)),
            )
            .await
    }

    pub async fn delete_slot(&self, slot_id: Uuid, auth_token: &str) -> ApiResult<()> {
        debug!("Deleting availability slot {}", slot_id);

        let path = format!("/api/availability/{}", slot_id);
        self.client
            .send(Method::DELETE, &path, Some(auth_token), None)
            .await
    }
}

/// Slots keyed by day-of-week for the schedule screen, declaration order
/// preserved within each day.
pub fn group_by_day(slots: &[AvailabilitySlot]) -> BTreeMap<u8, Vec<AvailabilitySlot>> {
    let mut grouped: BTreeMap<u8, Vec<AvailabilitySlot>> = BTreeMap::new();
    for slot in slots {
        grouped.entry(slot.day_of_week).or_default().push(slot.clone());
    }
    grouped
}

use reqwest::Method;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_config::ApiConfig;
use shared_http::RestClient;
use shared_models::{ApiError, ApiResult, Appointment};

use crate::models::{
    AppointmentsResponse, BookAppointmentRequest, DisputeRequest, SubmitReviewRequest,
};
use crate::services::guard::MutationGuard;

/// Appointment lifecycle over the REST API. Every mutation is a single call
/// with no optimistic local merge; callers refetch the full list afterwards
/// so the classifier only ever sees freshly consistent data.
pub struct AppointmentService {
    client: RestClient,
    guard: MutationGuard,
}

impl AppointmentService {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: RestClient::new(config),
            guard: MutationGuard::new(),
        }
    }

    /// Appointments of the authenticated identity, both roles.
    pub async fn list(&self, auth_token: &str) -> ApiResult<Vec<Appointment>> {
        debug!("Fetching appointments");

        let response: AppointmentsResponse = self
            .client
            .request(Method::GET, "/api/appointments/", Some(auth_token), None)
            .await?;

        Ok(response.appointments)
    }

    pub async fn book(
        &self,
        request: BookAppointmentRequest,
        auth_token: &str,
    ) -> ApiResult<()> {
        debug!(
            "Booking appointment with {} on {} {}",
            request.professional_id, request.date, request.time
        );

        self.client
            .send(
                Method::POST,
                "/api/appointments/",
                Some(auth_token),
                Some(json!(request)),
            )
            .await
    }

    pub async fn confirm(&self, appointment_id: Uuid, auth_token: &str) -> ApiResult<()> {
        self.transition(appointment_id, "confirm", auth_token, None)
            .await
    }

    pub async fn complete(&self, appointment_id: Uuid, auth_token: &str) -> ApiResult<()> {
        self.transition(appointment_id, "complete", auth_token, None)
            .await
    }

    pub async fn dispute(
        &self,
        appointment_id: Uuid,
        reason: &str,
        auth_token: &str,
    ) -> ApiResult<()> {
        if reason.trim().is_empty() {
            return Err(ApiError::Validation(
                "descreva o motivo da contestação".to_string(),
            ));
        }

        self.transition(
            appointment_id,
            "dispute",
            auth_token,
            Some(json!(DisputeRequest {
                reason: reason.trim().to_string(),
            })),
        )
        .await
    }

    pub async fn cancel(&self, appointment_id: Uuid, auth_token: &str) -> ApiResult<()> {
        let _permit = self.claim(appointment_id)?;
        debug!("Cancelling appointment {}", appointment_id);

        let path = format!("/api/appointments/{}", appointment_id);
        self.client
            .send(Method::DELETE, &path, Some(auth_token), None)
            .await
    }

    pub async fn submit_review(
        &self,
        appointment_id: Uuid,
        request: SubmitReviewRequest,
        auth_token: &str,
    ) -> ApiResult<()> {
        if request.rating < 1 || request.rating > 5 {
            return Err(ApiError::Validation(
                "selecione uma nota de 1 a 5".to_string(),
            ));
        }

        let _permit = self.claim(appointment_id)?;
        debug!("Submitting review for appointment {}", appointment_id);

        let path = format!("/api/reviews/appointment/{}", appointment_id);
        self.client
            .send(Method::POST, &path, Some(auth_token), Some(json!(request)))
            .await
    }

    async fn transition(
        &self,
        appointment_id: Uuid,
        verb: &str,
        auth_token: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<()> {
        let _permit = self.claim(appointment_id)?;
        debug!("Transition {} for appointment {}", verb, appointment_id);

        let path = format!("/api/appointments/{}/{}", appointment_id, verb);
        self.client
            .send(Method::PATCH, &path, Some(auth_token), body)
            .await
    }

    fn claim(&self, appointment_id: Uuid) -> ApiResult<crate::services::guard::MutationPermit<'_>> {
        self.guard.begin(appointment_id).ok_or_else(|| {
            ApiError::Validation("já existe uma operação em andamento para esta consulta".to_string())
        })
    }
}

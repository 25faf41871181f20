//! Canned domain objects and API bodies shared by the cell test suites.

use chrono::NaiveDate;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::{
    Appointment, AppointmentStatus, AppointmentType, AvailabilitySlot, PartySummary, User,
    UserType,
};

pub fn user(name: &str, user_type: UserType) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        preferred_name: None,
        user_type,
        profession: match user_type {
            UserType::Professional => Some("Psicólogo(a)".to_string()),
            UserType::Patient => None,
        },
        specialties: vec![],
        regulatory_body: None,
        registration_number: None,
        address: None,
        pricing: None,
        banking: None,
    }
}

pub fn slot(day_of_week: u8, start_time: &str, end_time: &str) -> AvailabilitySlot {
    AvailabilitySlot {
        id: Uuid::new_v4(),
        day_of_week,
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
    }
}

pub fn appointment(date: NaiveDate, time: &str, status: AppointmentStatus) -> Appointment {
    let patient_id = Uuid::new_v4();
    let professional_id = Uuid::new_v4();
    Appointment {
        id: Uuid::new_v4(),
        patient_id,
        professional_id,
        date,
        time: time.to_string(),
        appointment_type: AppointmentType::Online,
        price: 150.0,
        status,
        notes: None,
        can_dispute: false,
        has_review: false,
        professional_amount: None,
        patient: Some(PartySummary {
            id: patient_id,
            name: "Paciente Teste".to_string(),
            profession: None,
            phone: Some("(11) 99999-0000".to_string()),
        }),
        professional: Some(PartySummary {
            id: professional_id,
            name: "Dra. Teste".to_string(),
            profession: Some("Nutricionista".to_string()),
            phone: None,
        }),
    }
}

/// Response bodies in the exact envelope shapes the API uses.
pub struct MockApiResponses;

impl MockApiResponses {
    pub fn auth_response(token: &str, user: &User) -> Value {
        json!({ "token": token, "user": user })
    }

    pub fn appointments_response(appointments: &[Appointment]) -> Value {
        json!({ "appointments": appointments })
    }

    pub fn availability_response(slots: &[AvailabilitySlot]) -> Value {
        json!({ "availability": slots })
    }

    pub fn professional_body(id: Uuid, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "profession": "Fisioterapeuta",
            "specialties": ["Ortopedia"],
            "address": { "city": "São Paulo", "state": "SP" },
            "average_rating": 4.8,
            "total_reviews": 12
        })
    }

    pub fn professionals_response(professionals: &[Value]) -> Value {
        json!({ "professionals": professionals })
    }

    pub fn favorites_response(favorites: &[Value]) -> Value {
        json!({ "favorites": favorites })
    }

    pub fn error_response(message: &str) -> Value {
        json!({ "error": message })
    }
}

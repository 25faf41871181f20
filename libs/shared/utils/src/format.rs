//! User-facing labels. The product is Brazilian, so display strings stay in
//! Portuguese while wire values remain the API's snake_case identifiers.

use shared_models::{AppointmentStatus, AppointmentType};

pub fn type_label(appointment_type: AppointmentType) -> &'static str {
    match appointment_type {
        AppointmentType::Online => "Online (Telemedicina)",
        AppointmentType::InPerson => "Presencial (Consultório)",
        AppointmentType::Home => "Domiciliar (Casa)",
    }
}

pub fn status_label(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "Pendente",
        AppointmentStatus::Confirmed => "Confirmada",
        AppointmentStatus::Completed => "Realizada",
        AppointmentStatus::Cancelled => "Cancelada",
        AppointmentStatus::Disputed => "Em disputa",
        AppointmentStatus::PaidOut => "Paga",
    }
}

pub fn day_label(day_of_week: u8) -> &'static str {
    match day_of_week {
        0 => "Domingo",
        1 => "Segunda-feira",
        2 => "Terça-feira",
        3 => "Quarta-feira",
        4 => "Quinta-feira",
        5 => "Sexta-feira",
        6 => "Sábado",
        _ => "Dia inválido",
    }
}

pub fn brl(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_the_full_status_machine() {
        assert_eq!(status_label(AppointmentStatus::Pending), "Pendente");
        assert_eq!(status_label(AppointmentStatus::PaidOut), "Paga");
    }

    #[test]
    fn brl_renders_two_decimals() {
        assert_eq!(brl(150.0), "R$ 150.00");
        assert_eq!(brl(89.9), "R$ 89.90");
    }
}

use chrono::Local;
use tracing::warn;

use appointment_cell::AppointmentService;
use dashboard_cell::{patient_summary, professional_summary};
use shared_config::ApiConfig;
use shared_utils::format::{brl, status_label, type_label};

use crate::commands::AuthedContext;

pub async fn show(config: &ApiConfig) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    let user = ctx.session.require_authenticated()?;

    // A failed background fetch renders an empty summary instead of aborting.
    let service = AppointmentService::new(config);
    let appointments = match service.list(ctx.token()).await {
        Ok(appointments) => appointments,
        Err(e) => {
            warn!("Could not fetch appointments for the dashboard: {}", e);
            Vec::new()
        }
    };

    println!("Olá, {}!", user.display_name());

    if user.is_professional() {
        let today = Local::now().date_naive();
        let summary = professional_summary(&appointments, today);
        println!("  Consultas hoje:      {}", summary.today);
        println!("  Pacientes atendidos: {}", summary.unique_patients);
        println!("  Faturamento do mês:  {}", brl(summary.monthly_revenue));
    } else {
        let summary = patient_summary(&appointments);
        println!("  Consultas agendadas: {}", summary.scheduled);
        println!("  Consultas realizadas: {}", summary.completed);
        if !summary.preview.is_empty() {
            println!("  Próximas consultas:");
            for apt in &summary.preview {
                let with = apt
                    .professional
                    .as_ref()
                    .map(|p| p.name.as_str())
                    .unwrap_or("profissional");
                println!(
                    "    {} {} com {} ({}, {})",
                    apt.date,
                    apt.time_hhmm(),
                    with,
                    type_label(apt.appointment_type),
                    status_label(apt.status)
                );
            }
        }
    }

    Ok(())
}

use chrono::Local;

use appointment_cell::{
    allowed_actions, partition, AppointmentAction, AppointmentService, BookAppointmentRequest,
    SubmitReviewRequest,
};
use availability_cell::{time_options, ScheduleService};
use professional_cell::DirectoryService;
use shared_config::ApiConfig;
use shared_models::{ApiError, Appointment, AppointmentType, UserType};
use shared_utils::format::{brl, status_label, type_label};

use crate::cli::{AppointmentIdArg, AppointmentsArgs, BookArgs, DisputeArgs, ReviewArgs};
use crate::commands::AuthedContext;

pub async fn list(config: &ApiConfig, args: AppointmentsArgs) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    let user = ctx.session.require_authenticated()?;
    let role = user.user_type;

    let service = AppointmentService::new(config);
    let appointments = service.list(ctx.token()).await?;
    let buckets = partition(appointments, Local::now().naive_local());

    println!("Próximas consultas:");
    if buckets.upcoming.is_empty() {
        println!("  (nenhuma)");
    }
    for apt in &buckets.upcoming {
        print_line(apt, role);
    }

    if args.past {
        println!("Histórico:");
        if buckets.past.is_empty() {
            println!("  (nenhuma)");
        }
        for apt in &buckets.past {
            print_line(apt, role);
        }
    }
    Ok(())
}

pub async fn book(config: &ApiConfig, args: BookArgs) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    ctx.session.require_patient()?;

    let appointment_type = parse_type(&args.r#type)?;

    let directory = DirectoryService::new(config);
    let prof = directory
        .get_professional(args.professional_id, Some(ctx.token()))
        .await?;

    let price = prof
        .pricing
        .as_ref()
        .and_then(|p| match appointment_type {
            AppointmentType::Online => p.online,
            AppointmentType::InPerson => p.in_person,
            AppointmentType::Home => p.home,
        })
        .ok_or_else(|| {
            ApiError::Validation(format!(
                "{} não oferece atendimento {}",
                prof.display_name(),
                type_label(appointment_type)
            ))
        })?;

    // Only offer what the weekly schedule expands to, like the booking screen.
    let schedule = ScheduleService::new(config);
    let slots = schedule
        .professional_schedule(args.professional_id, Some(ctx.token()))
        .await?;
    let times = time_options(&slots, args.date);
    if !times.iter().any(|t| t == &args.time) {
        return Err(ApiError::Validation(format!(
            "horário indisponível; opções em {}: {}",
            args.date,
            if times.is_empty() { "nenhuma".to_string() } else { times.join(", ") }
        ))
        .into());
    }

    let service = AppointmentService::new(config);
    service
        .book(
            BookAppointmentRequest {
                professional_id: args.professional_id,
                date: args.date,
                time: args.time.clone(),
                appointment_type,
                price,
                notes: args.notes,
            },
            ctx.token(),
        )
        .await?;

    println!(
        "Consulta agendada com {} em {} às {} ({}).",
        prof.display_name(),
        args.date,
        args.time,
        brl(price)
    );
    Ok(())
}

pub async fn confirm(config: &ApiConfig, args: AppointmentIdArg) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    ctx.session.require_professional()?;

    AppointmentService::new(config)
        .confirm(args.id, ctx.token())
        .await?;
    println!("Consulta confirmada.");
    Ok(())
}

pub async fn complete(config: &ApiConfig, args: AppointmentIdArg) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    ctx.session.require_professional()?;

    AppointmentService::new(config)
        .complete(args.id, ctx.token())
        .await?;
    println!("Consulta marcada como realizada.");
    Ok(())
}

pub async fn cancel(config: &ApiConfig, args: AppointmentIdArg) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    ctx.session.require_authenticated()?;

    AppointmentService::new(config)
        .cancel(args.id, ctx.token())
        .await?;
    println!("Consulta cancelada.");
    Ok(())
}

pub async fn dispute(config: &ApiConfig, args: DisputeArgs) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    ctx.session.require_patient()?;

    AppointmentService::new(config)
        .dispute(args.id, &args.reason, ctx.token())
        .await?;
    println!("Contestação registrada.");
    Ok(())
}

pub async fn review(config: &ApiConfig, args: ReviewArgs) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    ctx.session.require_patient()?;

    AppointmentService::new(config)
        .submit_review(
            args.id,
            SubmitReviewRequest {
                rating: args.rating,
                comment: args.comment,
            },
            ctx.token(),
        )
        .await?;
    println!("Avaliação enviada. Obrigado!");
    Ok(())
}

fn print_line(apt: &Appointment, role: UserType) {
    let counterpart = match role {
        UserType::Patient => apt.professional.as_ref(),
        UserType::Professional => apt.patient.as_ref(),
    };
    let with = counterpart.map(|p| p.name.as_str()).unwrap_or("-");

    let actions: Vec<&str> = allowed_actions(apt, role)
        .into_iter()
        .map(action_hint)
        .collect();
    let hint = if actions.is_empty() {
        String::new()
    } else {
        format!("  [{}]", actions.join(", "))
    };

    println!(
        "  {}  {} {} com {} ({}, {}, {}){}",
        apt.id,
        apt.date,
        apt.time_hhmm(),
        with,
        type_label(apt.appointment_type),
        status_label(apt.status),
        brl(apt.price),
        hint
    );
}

fn action_hint(action: AppointmentAction) -> &'static str {
    match action {
        AppointmentAction::Confirm => "confirm",
        AppointmentAction::MarkCompleted => "complete",
        AppointmentAction::Cancel => "cancel",
        AppointmentAction::Dispute => "dispute",
        AppointmentAction::SubmitReview => "review",
    }
}

fn parse_type(value: &str) -> Result<AppointmentType, ApiError> {
    match value {
        "online" => Ok(AppointmentType::Online),
        "in_person" => Ok(AppointmentType::InPerson),
        "home" => Ok(AppointmentType::Home),
        other => Err(ApiError::Validation(format!(
            "tipo de consulta inválido: {} (use online, in_person ou home)",
            other
        ))),
    }
}

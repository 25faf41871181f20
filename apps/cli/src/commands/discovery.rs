use chrono::Local;

use availability_cell::{bookable_dates, time_options, ScheduleService, BOOKING_HORIZON_DAYS};
use professional_cell::{DirectoryService, FavoritesService, SearchFilters};
use session_cell::session::Session;
use session_cell::token_store::TokenStore;
use shared_config::ApiConfig;
use shared_models::Professional;
use shared_utils::format::brl;

use crate::cli::{FavoritesAction, FavoritesArgs, ProfessionalArgs, SearchArgs};
use crate::commands::AuthedContext;

pub async fn search(config: &ApiConfig, args: SearchArgs) -> anyhow::Result<()> {
    let store = TokenStore::new(config);
    let session = Session::restore(&store);

    let filters = SearchFilters {
        search: args.search,
        specialty: args.specialty,
        state: args.state,
        city: args.city,
        min_rating: args.min_rating,
    };

    // Professionals browsing the directory never see themselves.
    let exclude = session
        .current_user()
        .filter(|u| u.is_professional())
        .map(|u| u.id);

    let directory = DirectoryService::new(config);
    let professionals = directory.search(&filters, exclude, session.token()).await?;

    if professionals.is_empty() {
        println!("Nenhum profissional encontrado.");
        return Ok(());
    }

    for prof in &professionals {
        print_summary(prof);
    }
    Ok(())
}

pub async fn show_professional(config: &ApiConfig, args: ProfessionalArgs) -> anyhow::Result<()> {
    let store = TokenStore::new(config);
    let session = Session::restore(&store);

    let directory = DirectoryService::new(config);
    let prof = directory.get_professional(args.id, session.token()).await?;
    print_summary(&prof);
    if let Some(description) = &prof.description {
        println!("  {}", description);
    }

    let schedule = ScheduleService::new(config);
    let slots = schedule.professional_schedule(args.id, session.token()).await?;

    match args.date {
        Some(date) => {
            let times = time_options(&slots, date);
            if times.is_empty() {
                println!("Sem horários livres em {}.", date);
            } else {
                println!("Horários em {}: {}", date, times.join(", "));
            }
        }
        None => {
            let today = Local::now().date_naive();
            let dates = bookable_dates(&slots, today, BOOKING_HORIZON_DAYS);
            if dates.is_empty() {
                println!("Sem datas disponíveis nos próximos {} dias.", BOOKING_HORIZON_DAYS);
            } else {
                println!("Próximas datas com atendimento:");
                for date in dates.iter().take(10) {
                    println!("  {}", date);
                }
            }
        }
    }
    Ok(())
}

pub async fn favorites(config: &ApiConfig, args: FavoritesArgs) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    ctx.session.require_patient()?;
    let service = FavoritesService::new(config);

    match args.action {
        FavoritesAction::List => {
            let favorites = service.list(ctx.token()).await?;
            if favorites.is_empty() {
                println!("Você ainda não tem favoritos.");
            }
            for prof in &favorites {
                print_summary(prof);
            }
        }
        FavoritesAction::Add { professional_id } => {
            service.add(professional_id, ctx.token()).await?;
            println!("Adicionado aos favoritos.");
        }
        FavoritesAction::Remove { professional_id } => {
            service.remove(professional_id, ctx.token()).await?;
            println!("Removido dos favoritos.");
        }
    }
    Ok(())
}

fn print_summary(prof: &Professional) {
    let rating = match prof.average_rating {
        Some(rating) => format!("{:.1} ({} avaliações)", rating, prof.total_reviews),
        None => "sem avaliações".to_string(),
    };
    let price = match prof.min_price() {
        Some(price) => format!("a partir de {}", brl(price)),
        None => "preço sob consulta".to_string(),
    };
    println!(
        "{}  {} | {} | {} | {}",
        prof.id,
        prof.display_name(),
        prof.profession.as_deref().unwrap_or("-"),
        rating,
        price
    );
}

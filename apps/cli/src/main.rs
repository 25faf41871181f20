use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::{Cli, Command};
use shared_config::ApiConfig;
use shared_models::ApiError;

#[tokio::main]
async fn main() {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    let config = ApiConfig::from_env();
    info!("Using API at {}", config.api_base_url);

    if let Err(e) = run(args, &config).await {
        eprintln!("Erro: {}", e);
        if let Some(api_error) = e.downcast_ref::<ApiError>() {
            if api_error.requires_login() {
                eprintln!("Execute `vitalink login` para entrar novamente.");
            }
        }
        std::process::exit(1);
    }
}

async fn run(args: Cli, config: &ApiConfig) -> anyhow::Result<()> {
    match args.command {
        Command::Login(cmd) => commands::auth::login(config, cmd).await,
        Command::Register(cmd) => commands::auth::register(config, cmd).await,
        Command::Logout => commands::auth::logout(config),
        Command::Profile(cmd) => commands::auth::profile(config, cmd).await,
        Command::Dashboard => commands::dashboard::show(config).await,
        Command::Search(cmd) => commands::discovery::search(config, cmd).await,
        Command::Professional(cmd) => commands::discovery::show_professional(config, cmd).await,
        Command::Favorites(cmd) => commands::discovery::favorites(config, cmd).await,
        Command::Appointments(cmd) => commands::appointments::list(config, cmd).await,
        Command::Book(cmd) => commands::appointments::book(config, cmd).await,
        Command::Confirm(cmd) => commands::appointments::confirm(config, cmd).await,
        Command::Complete(cmd) => commands::appointments::complete(config, cmd).await,
        Command::Cancel(cmd) => commands::appointments::cancel(config, cmd).await,
        Command::Dispute(cmd) => commands::appointments::dispute(config, cmd).await,
        Command::Review(cmd) => commands::appointments::review(config, cmd).await,
        Command::Schedule => commands::schedule::show(config).await,
        Command::Slot(cmd) => commands::schedule::slot(config, cmd).await,
    }
}

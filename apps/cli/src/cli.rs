use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

/// Command-line client for the VitaLink healthcare marketplace.
#[derive(Debug, Parser)]
#[command(name = "vitalink", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Entra com email e senha
    Login(LoginArgs),
    /// Cria uma nova conta
    Register(RegisterArgs),
    /// Encerra a sessão atual
    Logout,
    /// Mostra ou atualiza o perfil da conta
    Profile(ProfileArgs),
    /// Resumo da conta (consultas, pacientes, faturamento)
    Dashboard,
    /// Busca profissionais
    Search(SearchArgs),
    /// Perfil público e agenda de um profissional
    Professional(ProfessionalArgs),
    /// Lista e gerencia favoritos
    Favorites(FavoritesArgs),
    /// Lista suas consultas
    Appointments(AppointmentsArgs),
    /// Agenda uma consulta
    Book(BookArgs),
    /// Confirma uma consulta pendente (profissional)
    Confirm(AppointmentIdArg),
    /// Marca uma consulta como realizada (profissional)
    Complete(AppointmentIdArg),
    /// Cancela uma consulta
    Cancel(AppointmentIdArg),
    /// Contesta uma consulta realizada (paciente)
    Dispute(DisputeArgs),
    /// Avalia uma consulta realizada (paciente)
    Review(ReviewArgs),
    /// Sua agenda semanal de atendimento (profissional)
    Schedule,
    /// Gerencia janelas de atendimento (profissional)
    Slot(SlotArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub preferred_name: Option<String>,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
    /// "patient" ou "professional"
    #[arg(long)]
    pub account_type: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub cpf: String,
    #[arg(long, default_value = "")]
    pub cep: String,
    #[arg(long, default_value = "")]
    pub street: String,
    #[arg(long, default_value = "")]
    pub number: String,
    #[arg(long, default_value = "")]
    pub complement: String,
    #[arg(long, default_value = "")]
    pub neighborhood: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub state: String,
    #[arg(long)]
    pub profession: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub specialties: Vec<String>,
    #[arg(long)]
    pub regulatory_body: Option<String>,
    #[arg(long)]
    pub regulatory_body_state: Option<String>,
    #[arg(long)]
    pub registration_number: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub online_price: Option<f64>,
    #[arg(long)]
    pub in_person_price: Option<f64>,
    #[arg(long)]
    pub home_price: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub pix_key: Option<String>,
    #[arg(long)]
    pub bank_name: Option<String>,
    #[arg(long)]
    pub bank_agency: Option<String>,
    #[arg(long)]
    pub bank_account: Option<String>,
    #[arg(long)]
    pub online_price: Option<f64>,
    #[arg(long)]
    pub in_person_price: Option<f64>,
    #[arg(long)]
    pub home_price: Option<f64>,
    #[arg(long)]
    pub online_enabled: Option<bool>,
    #[arg(long)]
    pub in_person_enabled: Option<bool>,
    #[arg(long)]
    pub home_enabled: Option<bool>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Texto livre (nome ou especialidade)
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub specialty: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub min_rating: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ProfessionalArgs {
    pub id: Uuid,
    /// Mostra os horários livres nesta data (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub action: FavoritesAction,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    /// Lista seus profissionais favoritos
    List,
    /// Adiciona um profissional aos favoritos
    Add { professional_id: Uuid },
    /// Remove um profissional dos favoritos
    Remove { professional_id: Uuid },
}

#[derive(Debug, Args)]
pub struct AppointmentsArgs {
    /// Inclui o histórico (consultas passadas e canceladas)
    #[arg(long)]
    pub past: bool,
}

#[derive(Debug, Args)]
pub struct BookArgs {
    #[arg(long)]
    pub professional_id: Uuid,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: NaiveDate,
    /// HH:MM
    #[arg(long)]
    pub time: String,
    /// "online", "in_person" ou "home"
    #[arg(long, default_value = "online")]
    pub r#type: String,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct AppointmentIdArg {
    pub id: Uuid,
}

#[derive(Debug, Args)]
pub struct DisputeArgs {
    pub id: Uuid,
    #[arg(long)]
    pub reason: String,
}

#[derive(Debug, Args)]
pub struct ReviewArgs {
    pub id: Uuid,
    /// Nota de 1 a 5
    #[arg(long)]
    pub rating: u8,
    #[arg(long)]
    pub comment: Option<String>,
}

#[derive(Debug, Args)]
pub struct SlotArgs {
    #[command(subcommand)]
    pub action: SlotAction,
}

#[derive(Debug, Subcommand)]
pub enum SlotAction {
    /// Cria uma janela semanal de atendimento
    Add {
        /// 0 (domingo) a 6 (sábado)
        #[arg(long)]
        day: u8,
        /// HH:MM
        #[arg(long)]
        start: String,
        /// HH:MM
        #[arg(long)]
        end: String,
    },
    /// Remove uma janela de atendimento
    Remove { slot_id: Uuid },
}

use shared_config::ApiConfig;
use shared_models::{ApiError, UserType};
use shared_utils::masks::{format_cep, format_cpf, format_phone};

use session_cell::auth::{validate_password_confirmation, AuthService};
use session_cell::models::{ProfileUpdateRequest, RegisterRequest};
use session_cell::session::Session;
use session_cell::token_store::TokenStore;

use crate::cli::{LoginArgs, ProfileArgs, RegisterArgs};
use crate::commands::AuthedContext;

pub async fn login(config: &ApiConfig, args: LoginArgs) -> anyhow::Result<()> {
    let auth = AuthService::new(config);
    let response = auth.login(&args.email, &args.password).await?;

    let store = TokenStore::new(config);
    let mut session = Session::anonymous();
    session.establish(response.token, response.user);
    session.persist(&store)?;

    let user = session.require_authenticated()?;
    println!("Bem-vindo(a), {}!", user.display_name());
    Ok(())
}

pub async fn register(config: &ApiConfig, args: RegisterArgs) -> anyhow::Result<()> {
    validate_password_confirmation(&args.password, &args.confirm_password)?;

    let account_type = parse_account_type(&args.account_type)?;
    let request = RegisterRequest {
        name: args.name,
        preferred_name: args.preferred_name,
        email: args.email,
        password: args.password,
        account_type: Some(account_type),
        phone: format_phone(&args.phone),
        cpf: format_cpf(&args.cpf),
        cep: format_cep(&args.cep),
        street: args.street,
        number: args.number,
        complement: args.complement,
        neighborhood: args.neighborhood,
        city: args.city,
        state: args.state,
        profession: args.profession,
        specialties: args.specialties,
        regulatory_body: args.regulatory_body,
        regulatory_body_state: args.regulatory_body_state,
        registration_number: args.registration_number,
        description: args.description,
        online_service: args.online_price.is_some(),
        online_price: args.online_price,
        in_person_service: args.in_person_price.is_some(),
        in_person_price: args.in_person_price,
        home_service: args.home_price.is_some(),
        home_price: args.home_price,
    };

    let auth = AuthService::new(config);
    let response = auth.register(request).await?;

    let store = TokenStore::new(config);
    let mut session = Session::anonymous();
    session.establish(response.token, response.user);
    session.persist(&store)?;

    let user = session.require_authenticated()?;
    println!("Conta criada. Bem-vindo(a), {}!", user.display_name());
    Ok(())
}

pub fn logout(config: &ApiConfig) -> anyhow::Result<()> {
    let store = TokenStore::new(config);
    let mut session = Session::restore(&store);
    session.clear();
    session.persist(&store)?;
    println!("Sessão encerrada.");
    Ok(())
}

pub async fn profile(config: &ApiConfig, args: ProfileArgs) -> anyhow::Result<()> {
    let mut ctx = AuthedContext::load(config)?;

    let update = ProfileUpdateRequest {
        pix_key: args.pix_key,
        bank_name: args.bank_name,
        bank_agency: args.bank_agency,
        bank_account: args.bank_account,
        online_price: args.online_price,
        in_person_price: args.in_person_price,
        home_price: args.home_price,
        online_enabled: args.online_enabled,
        in_person_enabled: args.in_person_enabled,
        home_enabled: args.home_enabled,
    };

    let has_changes = serde_json::to_value(&update)
        .map(|v| v.as_object().map(|o| o.values().any(|f| !f.is_null())).unwrap_or(false))
        .unwrap_or(false);

    if has_changes {
        let auth = AuthService::new(config);
        let token = ctx.token().to_string();
        let user = auth.update_profile(update, &token).await?;
        ctx.session.establish(token, user);
        ctx.session.persist(&ctx.store)?;
        println!("Perfil atualizado.");
    }

    let user = ctx.session.require_authenticated()?;
    println!("{} <{}>", user.display_name(), user.user_type);
    if let Some(profession) = &user.profession {
        println!("  Profissão: {}", profession);
    }
    if !user.specialties.is_empty() {
        println!("  Especialidades: {}", user.specialties.join(", "));
    }
    Ok(())
}

fn parse_account_type(value: &str) -> Result<UserType, ApiError> {
    match value {
        "patient" => Ok(UserType::Patient),
        "professional" => Ok(UserType::Professional),
        other => Err(ApiError::Validation(format!(
            "tipo de conta inválido: {} (use patient ou professional)",
            other
        ))),
    }
}

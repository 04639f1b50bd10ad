use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{email::resend::ResendEmailSender, http::app_state::AppState},
    application::use_cases::{
        admin::{AdminRepo, AdminUseCases},
        auth::{AuthUseCases, UserRepo},
        members::{MemberRepo, MemberUseCases},
    },
    infra::{config::AppConfig, postgres_persistence, sessions::RedisSessionStore},
};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let sessions = RedisSessionStore::new(&config.redis_url, config.session_ttl_days)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let email = Arc::new(ResendEmailSender::new(
        config.resend_api_key.clone(),
        config.email_from.clone(),
    ));

    let user_repo = postgres_arc.clone() as Arc<dyn UserRepo>;
    let admin_repo = postgres_arc.clone() as Arc<dyn AdminRepo>;
    let member_repo = postgres_arc.clone() as Arc<dyn MemberRepo>;

    let auth = AuthUseCases::new(
        user_repo.clone(),
        email,
        config.base_url_str().to_string(),
        config.admin_email.clone(),
        config.token_ttl_minutes,
    );

    let admin = AdminUseCases::new(admin_repo, user_repo.clone(), member_repo.clone());
    let members = MemberUseCases::new(member_repo);

    Ok(AppState {
        config: Arc::new(config),
        auth: Arc::new(auth),
        admin: Arc::new(admin),
        members: Arc::new(members),
        sessions: Arc::new(sessions),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nexus_site=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer().with_target(false).with_level(true).pretty();

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

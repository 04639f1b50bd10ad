use std::sync::Arc;

use crate::{
    application::{
        session::SessionStore,
        use_cases::{admin::AdminUseCases, auth::AuthUseCases, members::MemberUseCases},
    },
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<AuthUseCases>,
    pub admin: Arc<AdminUseCases>,
    pub members: Arc<MemberUseCases>,
    pub sessions: Arc<dyn SessionStore>,
}

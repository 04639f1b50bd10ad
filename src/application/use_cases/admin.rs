use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    application::{
        app_error::AppResult,
        password::verify_password,
        use_cases::{auth::UserRepo, members::MemberRepo},
        validators::normalize_email,
    },
    domain::entities::{admin::Admin, member::Member, user::User},
};

#[async_trait]
pub trait AdminRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;
}

#[derive(Debug)]
pub enum AdminLoginOutcome {
    Success(Admin),
    InvalidCredentials,
}

pub struct DashboardData {
    pub users: Vec<User>,
    pub members: Vec<Member>,
}

/// Admin flow: a separate two-state login against the admins table, plus the
/// dashboard listing. No verification or recovery sub-flow.
pub struct AdminUseCases {
    admins: Arc<dyn AdminRepo>,
    users: Arc<dyn UserRepo>,
    members: Arc<dyn MemberRepo>,
}

impl AdminUseCases {
    pub fn new(
        admins: Arc<dyn AdminRepo>,
        users: Arc<dyn UserRepo>,
        members: Arc<dyn MemberRepo>,
    ) -> Self {
        Self {
            admins,
            users,
            members,
        }
    }

    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AdminLoginOutcome> {
        let email = normalize_email(email);
        let Some(admin) = self.admins.find_by_email(&email).await? else {
            return Ok(AdminLoginOutcome::InvalidCredentials);
        };
        if !verify_password(admin.password_hash.clone(), password.to_string()).await? {
            return Ok(AdminLoginOutcome::InvalidCredentials);
        }
        Ok(AdminLoginOutcome::Success(admin))
    }

    pub async fn dashboard_data(&self) -> AppResult<DashboardData> {
        let users = self.users.list_all().await?;
        let members = self.members.list_all().await?;
        Ok(DashboardData { users, members })
    }
}

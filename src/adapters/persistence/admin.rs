use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    application::{
        app_error::{AppError, AppResult},
        use_cases::admin::AdminRepo,
    },
    domain::entities::admin::Admin,
};

#[derive(sqlx::FromRow, Debug)]
struct AdminRow {
    id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<AdminRow> for Admin {
    fn from(r: AdminRow) -> Self {
        Admin {
            id: r.id,
            email: r.email,
            password_hash: r.password_hash,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl AdminRepo for PostgresPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, password_hash, created_at FROM admins \
             WHERE lower(email) = lower($1)",
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(Into::into))
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    application::{
        app_error::{AppError, AppResult},
        use_cases::members::MemberRepo,
    },
    domain::entities::member::{Member, NewMember},
};

#[derive(sqlx::FromRow, Debug)]
struct MemberRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
    joined_at: DateTime<Utc>,
}

impl From<MemberRow> for Member {
    fn from(r: MemberRow) -> Self {
        Member {
            id: r.id,
            name: r.name,
            email: r.email,
            phone: r.phone,
            message: r.message,
            joined_at: r.joined_at,
        }
    }
}

#[async_trait]
impl MemberRepo for PostgresPersistence {
    async fn create(&self, member: NewMember) -> AppResult<Member> {
        let id = Uuid::new_v4();
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
                INSERT INTO members (id, name, email, phone, message)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, email, phone, message, joined_at
            "#,
        )
        .bind(id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(&member.message)
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.into())
    }

    async fn list_all(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT id, name, email, phone, message, joined_at FROM members \
             ORDER BY joined_at DESC",
        )
        .fetch_all(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    application::{
        app_error::{AppError, AppResult},
        use_cases::auth::UserRepo,
    },
    domain::entities::user::{NewUser, User, UserRole},
};

// User row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
struct UserRow {
    id: Uuid,
    fullname: String,
    email: String,
    phone: Option<String>,
    region: Option<String>,
    city: Option<String>,
    age: Option<i32>,
    password_hash: String,
    role: String,
    is_verified: bool,
    verification_token: Option<String>,
    verification_token_expires: Option<DateTime<Utc>>,
    reset_password_token: Option<String>,
    reset_password_expires: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            fullname: r.fullname,
            email: r.email,
            phone: r.phone,
            region: r.region,
            city: r.city,
            age: r.age,
            password_hash: r.password_hash,
            role: UserRole::from_raw(&r.role),
            is_verified: r.is_verified,
            verification_token: r.verification_token,
            verification_token_expires: r.verification_token_expires,
            reset_password_token: r.reset_password_token,
            reset_password_expires: r.reset_password_expires,
            created_at: r.created_at,
        }
    }
}

const USER_COLUMNS: &str = "id, fullname, email, phone, region, city, age, password_hash, role, \
     is_verified, verification_token, verification_token_expires, \
     reset_password_token, reset_password_expires, created_at";

#[async_trait]
impl UserRepo for PostgresPersistence {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        let id = Uuid::new_v4();
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
                INSERT INTO users (id, fullname, email, phone, region, city, age,
                                   password_hash, role, is_verified,
                                   verification_token, verification_token_expires)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&user.fullname)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.region)
        .bind(&user.city)
        .bind(user.age)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.is_verified)
        .bind(&user.verification_token)
        .bind(user.verification_token_expires)
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE lower(email) = lower($1)"
        ))
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_verification_token(&self, token: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE verification_token = $1 AND verification_token_expires > now()"
        ))
        .bind(token)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE reset_password_token = $1 AND reset_password_expires > now()"
        ))
        .bind(token)
        .fetch_optional(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(row.map(Into::into))
    }

    async fn mark_verified(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET is_verified = TRUE, \
             verification_token = NULL, verification_token_expires = NULL \
             WHERE id = $1",
        )
        .bind(user_id)
        .execute(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn set_verification_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET verification_token = $2, verification_token_expires = $3 \
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(token)
        .bind(expires)
        .execute(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn set_reset_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET reset_password_token = $2, reset_password_expires = $3 \
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(token)
        .bind(expires)
        .execute(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn set_password_and_clear_reset(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET password_hash = $2, \
             reset_password_token = NULL, reset_password_expires = NULL \
             WHERE id = $1",
        )
        .bind(user_id)
        .bind(password_hash)
        .execute(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool())
        .await
        .map_err(AppError::from)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

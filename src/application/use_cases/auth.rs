use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    application::{
        app_error::{AppError, AppResult},
        email_templates,
        password::{hash_password, verify_password},
        tokens::issue_token,
        validators::{is_valid_email, normalize_email},
    },
    domain::entities::user::{NewUser, User, UserRole},
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Persists a new user. The storage layer's unique index on email is the
    /// authority on duplicates; a constraint violation surfaces as
    /// `AppError::DuplicateEmail`.
    async fn create(&self, user: NewUser) -> AppResult<User>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    /// Token lookups filter by `expires > now`; an expired token behaves
    /// identically to a missing one.
    async fn find_by_verification_token(&self, token: &str) -> AppResult<Option<User>>;
    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>>;
    /// Sets `is_verified` and clears both verification columns.
    async fn mark_verified(&self, user_id: Uuid) -> AppResult<()>;
    async fn set_verification_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires: DateTime<Utc>,
    ) -> AppResult<()>;
    async fn set_reset_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires: DateTime<Utc>,
    ) -> AppResult<()>;
    /// Stores a new password hash and clears both reset columns.
    async fn set_password_and_clear_reset(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> AppResult<()>;
    async fn list_all(&self) -> AppResult<Vec<User>>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

#[derive(Debug, Clone)]
pub struct SignupInput {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug)]
pub enum SignupOutcome {
    /// Account created, verification email attempted.
    Created { email: String },
    /// The bootstrap admin address is verified at creation and logged in
    /// immediately.
    AutoVerified(User),
    /// Steer the user to the login form instead of a hard error.
    DuplicateEmail,
    /// Missing or mismatched form fields; re-render with the message.
    Invalid(&'static str),
}

#[derive(Debug)]
pub enum VerifyOutcome {
    Verified { email: String },
    InvalidOrExpired,
}

#[derive(Debug)]
pub enum ResendOutcome {
    Sent,
    AlreadyVerified,
    NoAccount,
}

#[derive(Debug)]
pub enum LoginOutcome {
    Success(User),
    /// Unknown email and wrong password are indistinguishable to the caller.
    InvalidCredentials,
    NotVerified,
}

#[derive(Debug)]
pub enum ForgotOutcome {
    LinkSent,
    NotVerified,
    NoAccount,
}

#[derive(Debug)]
pub enum ResetOutcome {
    Success,
    /// Confirmation mismatch; the token stays valid until its natural expiry.
    PasswordMismatch,
    InvalidOrExpired,
}

/// Orchestrates the credential lifecycle: signup, verification, login,
/// recovery. Sole mutator of user security and token fields.
pub struct AuthUseCases {
    users: Arc<dyn UserRepo>,
    email: Arc<dyn EmailSender>,
    base_url: String,
    admin_email: String,
    token_ttl_minutes: i64,
}

impl AuthUseCases {
    pub fn new(
        users: Arc<dyn UserRepo>,
        email: Arc<dyn EmailSender>,
        base_url: String,
        admin_email: String,
        token_ttl_minutes: i64,
    ) -> Self {
        Self {
            users,
            email,
            base_url,
            admin_email: normalize_email(&admin_email),
            token_ttl_minutes,
        }
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn signup(&self, input: SignupInput) -> AppResult<SignupOutcome> {
        if input.fullname.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
            || input.confirm_password.is_empty()
        {
            return Ok(SignupOutcome::Invalid("Please fill all required fields."));
        }
        if !is_valid_email(&input.email) {
            return Ok(SignupOutcome::Invalid("Please enter a valid email address."));
        }
        if input.password != input.confirm_password {
            return Ok(SignupOutcome::Invalid("Passwords do not match."));
        }

        let email = normalize_email(&input.email);
        if self.users.find_by_email(&email).await?.is_some() {
            return Ok(SignupOutcome::DuplicateEmail);
        }

        let is_bootstrap_admin = email == self.admin_email;
        let password_hash = hash_password(input.password).await?;
        let (token, expires) = issue_token(self.token_ttl_minutes);

        let draft = NewUser {
            fullname: input.fullname.trim().to_string(),
            email,
            phone: input.phone,
            region: input.region,
            city: input.city,
            age: input.age,
            password_hash,
            role: if is_bootstrap_admin {
                UserRole::Admin
            } else {
                UserRole::User
            },
            is_verified: is_bootstrap_admin,
            verification_token: (!is_bootstrap_admin).then_some(token.clone()),
            verification_token_expires: (!is_bootstrap_admin).then_some(expires),
        };

        let user = match self.users.create(draft).await {
            Ok(user) => user,
            // Lost a concurrent-signup race; the unique index decided.
            Err(AppError::DuplicateEmail) => return Ok(SignupOutcome::DuplicateEmail),
            Err(e) => return Err(e),
        };

        if user.is_verified {
            return Ok(SignupOutcome::AutoVerified(user));
        }

        self.send_verification_email(&user, &token).await;
        Ok(SignupOutcome::Created { email: user.email })
    }

    #[instrument(skip(self, token))]
    pub async fn verify_email(&self, token: &str) -> AppResult<VerifyOutcome> {
        let Some(user) = self.users.find_by_verification_token(token).await? else {
            return Ok(VerifyOutcome::InvalidOrExpired);
        };
        self.users.mark_verified(user.id).await?;
        tracing::info!(email = %user.email, "email verified");
        Ok(VerifyOutcome::Verified { email: user.email })
    }

    #[instrument(skip(self), fields(email = %email))]
    pub async fn resend_verification(&self, email: &str) -> AppResult<ResendOutcome> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            return Ok(ResendOutcome::NoAccount);
        };
        if user.is_verified {
            return Ok(ResendOutcome::AlreadyVerified);
        }
        // A fresh token permanently invalidates any previously mailed link.
        let (token, expires) = issue_token(self.token_ttl_minutes);
        self.users
            .set_verification_token(user.id, &token, expires)
            .await?;
        self.send_verification_email(&user, &token).await;
        Ok(ResendOutcome::Sent)
    }

    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            return Ok(LoginOutcome::InvalidCredentials);
        };
        if !verify_password(user.password_hash.clone(), password.to_string()).await? {
            return Ok(LoginOutcome::InvalidCredentials);
        }
        if !user.is_verified {
            return Ok(LoginOutcome::NotVerified);
        }
        Ok(LoginOutcome::Success(user))
    }

    #[instrument(skip(self), fields(email = %email))]
    pub async fn forgot_password(&self, email: &str) -> AppResult<ForgotOutcome> {
        let email = normalize_email(email);
        let Some(user) = self.users.find_by_email(&email).await? else {
            return Ok(ForgotOutcome::NoAccount);
        };
        if !user.is_verified {
            return Ok(ForgotOutcome::NotVerified);
        }
        let (token, expires) = issue_token(self.token_ttl_minutes);
        self.users.set_reset_token(user.id, &token, expires).await?;

        let (subject, html) = email_templates::reset_password_email(
            &self.base_url,
            &user.fullname,
            &token,
            self.token_ttl_minutes,
        );
        if let Err(err) = self.email.send(&user.email, &subject, &html).await {
            // Token state is already persisted and stays valid; the user can
            // retry the request.
            tracing::error!(error = ?err, email = %user.email, "failed to send reset email");
        }
        Ok(ForgotOutcome::LinkSent)
    }

    /// Looks up the reset token without consuming it, for rendering the form.
    pub async fn reset_token_is_valid(&self, token: &str) -> AppResult<bool> {
        Ok(self.users.find_by_reset_token(token).await?.is_some())
    }

    #[instrument(skip(self, token, password, confirm_password))]
    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
        confirm_password: &str,
    ) -> AppResult<ResetOutcome> {
        let Some(user) = self.users.find_by_reset_token(token).await? else {
            return Ok(ResetOutcome::InvalidOrExpired);
        };
        if password.is_empty() || password != confirm_password {
            return Ok(ResetOutcome::PasswordMismatch);
        }
        let password_hash = hash_password(password.to_string()).await?;
        self.users
            .set_password_and_clear_reset(user.id, &password_hash)
            .await?;
        tracing::info!(email = %user.email, "password reset");
        Ok(ResetOutcome::Success)
    }

    /// Verification status probe for the signup page poller.
    pub async fn check_verification(&self, email: &str) -> AppResult<Option<bool>> {
        let email = normalize_email(email);
        Ok(self
            .users
            .find_by_email(&email)
            .await?
            .map(|u| u.is_verified))
    }

    async fn send_verification_email(&self, user: &User, token: &str) {
        let (subject, html) = email_templates::verification_email(
            &self.base_url,
            &user.fullname,
            token,
            self.token_ttl_minutes,
        );
        if let Err(err) = self.email.send(&user.email, &subject, &html).await {
            // Best-effort delivery: the stored token stays valid and the user
            // can retry via resend-verification.
            tracing::error!(error = ?err, email = %user.email, "failed to send verification email");
        }
    }
}

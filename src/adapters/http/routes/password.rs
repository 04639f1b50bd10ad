//! Password recovery: request a reset link, then consume it.

use axum::{
    Router,
    extract::{Path, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, views},
    application::{
        app_error::AppResult,
        use_cases::auth::{ForgotOutcome, ResetOutcome},
    },
};

async fn forgot_form() -> Html<String> {
    Html(views::forgot_password_page(None))
}

#[derive(Deserialize)]
struct ForgotForm {
    email: String,
}

async fn forgot_submit(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ForgotForm>,
) -> AppResult<Html<String>> {
    let msg = match state.auth.forgot_password(&form.email).await? {
        ForgotOutcome::NoAccount => "No account found for that email.",
        ForgotOutcome::NotVerified => {
            "This account has not been verified yet. Please verify your email first."
        }
        ForgotOutcome::LinkSent => "Reset link sent to your email.",
    };
    Ok(Html(views::forgot_password_page(Some(msg))))
}

async fn reset_form(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Html<String>> {
    if !state.auth.reset_token_is_valid(&token).await? {
        return Ok(Html(views::reset_expired_page()));
    }
    Ok(Html(views::reset_password_page(&token, None)))
}

#[derive(Deserialize)]
struct ResetForm {
    password: String,
    confirm_password: String,
}

async fn reset_submit(
    State(state): State<AppState>,
    Path(token): Path<String>,
    axum::Form(form): axum::Form<ResetForm>,
) -> AppResult<Html<String>> {
    match state
        .auth
        .reset_password(&token, &form.password, &form.confirm_password)
        .await?
    {
        ResetOutcome::InvalidOrExpired => Ok(Html(views::reset_expired_page())),
        ResetOutcome::PasswordMismatch => Ok(Html(views::reset_password_page(
            &token,
            Some("Passwords do not match."),
        ))),
        ResetOutcome::Success => Ok(Html(views::reset_success_page())),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/forgot-password", get(forgot_form).post(forgot_submit))
        .route("/reset-password/{token}", get(reset_form).post(reset_submit))
}

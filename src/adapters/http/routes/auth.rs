//! Signup, email verification, login and logout.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, views},
    application::{
        app_error::AppResult,
        session::SessionData,
        use_cases::auth::{
            LoginOutcome, ResendOutcome, SignupInput, SignupOutcome, VerifyOutcome,
        },
    },
};

use super::{destroy_session, sanitize_next, start_session, urlencode};

#[derive(Deserialize)]
struct NextParam {
    next: Option<String>,
}

async fn signup_form(Query(params): Query<NextParam>) -> Html<String> {
    Html(views::signup_page(None, sanitize_next(params.next.as_deref())))
}

#[derive(Deserialize)]
struct SignupForm {
    fullname: String,
    email: String,
    password: String,
    confirm_password: String,
    phone: Option<String>,
    region: Option<String>,
    city: Option<String>,
    age: Option<String>,
    next: Option<String>,
}

async fn signup_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::Form(form): axum::Form<SignupForm>,
) -> AppResult<Response> {
    let next = sanitize_next(form.next.as_deref()).to_string();

    let input = SignupInput {
        fullname: form.fullname,
        email: form.email,
        password: form.password,
        confirm_password: form.confirm_password,
        phone: form.phone.filter(|p| !p.trim().is_empty()),
        region: form.region.filter(|r| !r.trim().is_empty()),
        city: form.city.filter(|c| !c.trim().is_empty()),
        age: form.age.and_then(|a| a.trim().parse().ok()),
    };

    match state.auth.signup(input).await? {
        SignupOutcome::Invalid(msg) => Ok(Html(views::signup_page(Some(msg), &next)).into_response()),
        SignupOutcome::DuplicateEmail => Ok(Html(views::login_page(
            None,
            Some("This email is already registered. Please log in instead."),
            &next,
        ))
        .into_response()),
        SignupOutcome::Created { email } => Ok(Redirect::to(&format!(
            "/thank-you?email={}",
            urlencode(&email)
        ))
        .into_response()),
        SignupOutcome::AutoVerified(user) => {
            let jar = start_session(
                &state,
                jar,
                SessionData::for_user(user.id, user.fullname.clone()),
            )
            .await?;
            Ok((jar, Redirect::to(&next)).into_response())
        }
    }
}

#[derive(Deserialize)]
struct VerifyParams {
    token: Option<String>,
}

async fn verify_email(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> AppResult<Response> {
    let Some(token) = params.token else {
        return Ok(Html(views::verify_failed_page()).into_response());
    };
    match state.auth.verify_email(&token).await? {
        VerifyOutcome::InvalidOrExpired => Ok(Html(views::verify_failed_page()).into_response()),
        VerifyOutcome::Verified { email } => Ok(Redirect::to(&format!(
            "/thank-you?verified=true&email={}",
            urlencode(&email)
        ))
        .into_response()),
    }
}

#[derive(Deserialize)]
struct ResendForm {
    email: String,
}

async fn resend_verification(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ResendForm>,
) -> AppResult<Html<String>> {
    let msg = match state.auth.resend_verification(&form.email).await? {
        ResendOutcome::NoAccount => "No account found with that email.",
        ResendOutcome::AlreadyVerified => "This account is already verified.",
        ResendOutcome::Sent => "A new verification email has been sent. Please check your inbox.",
    };
    Ok(Html(views::message_page(msg)))
}

async fn login_form(Query(params): Query<NextParam>) -> Html<String> {
    Html(views::login_page(
        None,
        None,
        sanitize_next(params.next.as_deref()),
    ))
}

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    password: String,
    next: Option<String>,
}

async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::Form(form): axum::Form<LoginForm>,
) -> AppResult<Response> {
    let next = sanitize_next(form.next.as_deref()).to_string();

    match state.auth.login(&form.email, &form.password).await? {
        LoginOutcome::InvalidCredentials => Ok(Html(views::login_page(
            Some("Invalid email or password."),
            None,
            &next,
        ))
        .into_response()),
        LoginOutcome::NotVerified => Ok(Html(views::login_page(
            Some("Please verify your email first."),
            None,
            &next,
        ))
        .into_response()),
        LoginOutcome::Success(user) => {
            let jar = start_session(
                &state,
                jar,
                SessionData::for_user(user.id, user.fullname.clone()),
            )
            .await?;
            Ok((jar, Redirect::to(&next)).into_response())
        }
    }
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> AppResult<impl IntoResponse> {
    let jar = destroy_session(&state, jar).await?;
    Ok((jar, Redirect::to("/login")))
}

#[derive(Deserialize)]
struct CheckVerificationParams {
    email: String,
}

async fn check_verification(
    State(state): State<AppState>,
    Query(params): Query<CheckVerificationParams>,
) -> AppResult<Response> {
    match state.auth.check_verification(&params.email).await? {
        Some(verified) => Ok(Json(serde_json::json!({ "verified": verified })).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "User not found" })),
        )
            .into_response()),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup_form).post(signup_submit))
        .route("/verify-email", get(verify_email))
        .route("/resend-verification", post(resend_verification))
        .route("/login", get(login_form).post(login_submit))
        .route("/logout", get(logout))
        .route("/check-verification", get(check_verification))
}

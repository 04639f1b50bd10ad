//! Admin login and the dashboard behind it.

use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, views},
    application::{
        app_error::AppResult,
        session::SessionData,
        use_cases::admin::AdminLoginOutcome,
    },
};

use super::{current_session, destroy_session, start_session};

async fn login_form() -> Html<String> {
    Html(views::admin_login_page(None))
}

#[derive(Deserialize)]
struct AdminLoginForm {
    email: String,
    password: String,
}

async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::Form(form): axum::Form<AdminLoginForm>,
) -> AppResult<Response> {
    match state.admin.login(&form.email, &form.password).await? {
        AdminLoginOutcome::InvalidCredentials => {
            Ok(Html(views::admin_login_page(Some("Invalid email or password."))).into_response())
        }
        AdminLoginOutcome::Success(admin) => {
            let jar = start_session(&state, jar, SessionData::for_admin(admin.id)).await?;
            Ok((jar, Redirect::to("/admin/dashboard")).into_response())
        }
    }
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> AppResult<impl IntoResponse> {
    let jar = destroy_session(&state, jar).await?;
    Ok((jar, Redirect::to("/admin/login")))
}

async fn dashboard(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    let is_admin = current_session(&state, &jar)
        .await?
        .is_some_and(|s| s.is_admin());
    if !is_admin {
        return Ok(Redirect::to("/admin/login").into_response());
    }

    let data = state.admin.dashboard_data().await?;
    Ok(Html(views::admin_dashboard_page(&data.users, &data.members)).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", get(login_form).post(login_submit))
        .route("/admin/logout", get(logout))
        .route("/admin/dashboard", get(dashboard))
}

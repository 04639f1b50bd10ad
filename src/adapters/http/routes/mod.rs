pub mod admin;
pub mod auth;
pub mod pages;
pub mod password;

use axum::Router;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    adapters::http::app_state::AppState,
    application::{
        app_error::AppResult,
        session::SessionData,
        tokens::generate_session_id,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(auth::router())
        .merge(password::router())
        .merge(admin::router())
}

pub(crate) const SESSION_COOKIE: &str = "sid";
pub(crate) const DEFAULT_NEXT: &str = "/projects";

fn session_cookie(session_id: String, ttl_days: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::days(ttl_days))
        .build()
}

/// Loads the session referenced by the `sid` cookie, if any.
pub(crate) async fn current_session(
    state: &AppState,
    jar: &CookieJar,
) -> AppResult<Option<SessionData>> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };
    state.sessions.load(cookie.value()).await
}

/// Attaches an identity under a fresh session identifier and sets the cookie.
/// Any previous session for this client is abandoned to its TTL.
pub(crate) async fn start_session(
    state: &AppState,
    jar: CookieJar,
    data: SessionData,
) -> AppResult<CookieJar> {
    let session_id = generate_session_id();
    state.sessions.save(&session_id, &data).await?;
    Ok(jar.add(session_cookie(session_id, state.config.session_ttl_days)))
}

/// Destroys the server-side session and expires the client cookie.
pub(crate) async fn destroy_session(state: &AppState, jar: CookieJar) -> AppResult<CookieJar> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(cookie.value()).await?;
    }
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    Ok(jar.remove(removal))
}

/// Percent-encodes a value for embedding in a query string.
pub(crate) fn urlencode(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Restricts post-login redirect targets to local paths.
pub(crate) fn sanitize_next(raw: Option<&str>) -> &str {
    match raw {
        Some(next) if next.starts_with('/') && !next.starts_with("//") => next,
        _ => DEFAULT_NEXT,
    }
}

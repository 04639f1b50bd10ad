//! Public pages, the membership-interest form and the guarded project page.

use axum::{
    Router,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, views},
    application::app_error::AppResult,
    domain::entities::member::NewMember,
};

use super::{current_session, urlencode};

async fn home() -> Html<String> {
    Html(views::home_page())
}

async fn about() -> Html<String> {
    Html(views::about_page())
}

async fn contact() -> Html<String> {
    Html(views::contact_page())
}

async fn join_form() -> Html<String> {
    Html(views::join_page())
}

#[derive(Deserialize)]
struct JoinForm {
    name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
}

async fn join_submit(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<JoinForm>,
) -> AppResult<impl IntoResponse> {
    let member = state
        .members
        .submit(NewMember {
            name: form.name,
            email: form.email,
            phone: form.phone.filter(|p| !p.trim().is_empty()),
            message: form.message.filter(|m| !m.trim().is_empty()),
        })
        .await?;
    Ok(Redirect::to(&format!(
        "/thank-you?email={}",
        urlencode(&member.email)
    )))
}

#[derive(Deserialize)]
struct ThankYouParams {
    email: Option<String>,
    verified: Option<bool>,
}

async fn thank_you(
    State(state): State<AppState>,
    Query(params): Query<ThankYouParams>,
) -> Html<String> {
    Html(views::thank_you_page(
        params.email.as_deref().unwrap_or(""),
        params.verified.unwrap_or(false),
        state.config.token_ttl_minutes,
    ))
}

async fn projects(State(state): State<AppState>, jar: CookieJar) -> AppResult<Html<String>> {
    let session = current_session(&state, &jar).await?;
    let user_name = session.and_then(|s| s.user_name);
    Ok(Html(views::projects_page(user_name.as_deref())))
}

#[derive(Deserialize)]
struct JoinProjectParams {
    #[serde(rename = "type")]
    project_type: Option<String>,
}

async fn join_project(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<JoinProjectParams>,
) -> AppResult<impl IntoResponse> {
    let project_type = params.project_type.unwrap_or_else(|| "Community".to_string());

    let authenticated = current_session(&state, &jar)
        .await?
        .is_some_and(|s| s.is_authenticated());
    if !authenticated {
        let target = format!("/join-project?type={}", urlencode(&project_type));
        return Ok(
            Redirect::to(&format!("/login?next={}", urlencode(&target))).into_response(),
        );
    }

    Ok(Html(views::join_project_page(&project_type)).into_response())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/join", get(join_form))
        .route("/join", post(join_submit))
        .route("/thank-you", get(thank_you))
        .route("/projects", get(projects))
        .route("/join-project", get(join_project))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        application::session::{SessionData, SessionStore},
        test_utils::test_app_state,
    };

    fn server(state: AppState) -> TestServer {
        TestServer::new(super::super::router().with_state(state)).unwrap()
    }

    #[tokio::test]
    async fn join_persists_member_and_redirects_to_thank_you() {
        let ctx = test_app_state();
        let server = server(ctx.state);

        let response = server
            .post("/join")
            .form(&json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "",
                "message": "count me in",
            }))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(
            response.header("location"),
            "/thank-you?email=jane%40x.com"
        );
        assert_eq!(ctx.members.count(), 1);
        let member = &ctx.members.all()[0];
        assert_eq!(member.name, "Jane Doe");
        assert!(member.phone.is_none());
    }

    #[tokio::test]
    async fn join_without_name_is_rejected() {
        let ctx = test_app_state();
        let server = server(ctx.state);

        let response = server
            .post("/join")
            .form(&json!({ "name": "", "email": "jane@x.com" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(ctx.members.count(), 0);
    }

    #[tokio::test]
    async fn thank_you_expiry_text_follows_token_ttl() {
        let ctx = test_app_state();
        let server = server(ctx.state);

        let response = server
            .get("/thank-you")
            .add_query_param("email", "a@x.com")
            .await;

        response.assert_status_ok();
        response.assert_text_contains("expires in 15 minutes");
    }

    #[tokio::test]
    async fn join_project_redirects_anonymous_visitors_to_login() {
        let ctx = test_app_state();
        let server = server(ctx.state);

        let response = server.get("/join-project").add_query_param("type", "Arts").await;

        response.assert_status(StatusCode::SEE_OTHER);
        let location = response.header("location");
        let location = location.to_str().unwrap();
        assert!(location.starts_with("/login?next="));
        assert!(location.contains("join-project"));
    }

    #[tokio::test]
    async fn join_project_renders_for_authenticated_users() {
        let ctx = test_app_state();
        ctx.sessions
            .save("sid-1", &SessionData::for_user(uuid::Uuid::new_v4(), "Ada".into()))
            .await
            .unwrap();
        let server = server(ctx.state);

        let response = server
            .get("/join-project")
            .add_query_param("type", "Arts")
            .add_cookie(axum_extra::extract::cookie::Cookie::new("sid", "sid-1"))
            .await;

        response.assert_status_ok();
        response.assert_text_contains("Arts");
    }

    #[tokio::test]
    async fn projects_greets_logged_in_users() {
        let ctx = test_app_state();
        ctx.sessions
            .save("sid-2", &SessionData::for_user(uuid::Uuid::new_v4(), "Ada".into()))
            .await
            .unwrap();
        let server = server(ctx.state);

        let response = server
            .get("/projects")
            .add_cookie(axum_extra::extract::cookie::Cookie::new("sid", "sid-2"))
            .await;
        response.assert_status_ok();
        response.assert_text_contains("Welcome back, Ada!");
    }
}

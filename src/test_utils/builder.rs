use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::{admin::AdminUseCases, auth::AuthUseCases, members::MemberUseCases},
    infra::config::AppConfig,
    test_utils::{
        InMemoryAdminRepo, InMemoryMemberRepo, InMemorySessionStore, InMemoryUserRepo,
        MockEmailSender,
    },
};

pub const TEST_BASE_URL: &str = "https://nexus.test";
pub const TEST_ADMIN_EMAIL: &str = "admin@nexus.test";

/// An `AppState` wired against in-memory doubles, plus handles to each double
/// for assertions.
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserRepo>,
    pub admins: Arc<InMemoryAdminRepo>,
    pub members: Arc<InMemoryMemberRepo>,
    pub email: Arc<MockEmailSender>,
    pub sessions: Arc<InMemorySessionStore>,
}

pub fn test_app_state() -> TestContext {
    test_app_state_with_email(Arc::new(MockEmailSender::new()))
}

pub fn test_app_state_with_email(email: Arc<MockEmailSender>) -> TestContext {
    let users = Arc::new(InMemoryUserRepo::new());
    let admins = Arc::new(InMemoryAdminRepo::new());
    let members = Arc::new(InMemoryMemberRepo::new());
    let sessions = Arc::new(InMemorySessionStore::new());

    let config = AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        database_url: String::new(),
        redis_url: String::new(),
        resend_api_key: SecretString::new("test-key".into()),
        email_from: "noreply@nexus.test".to_string(),
        base_url: TEST_BASE_URL.parse().unwrap(),
        admin_email: TEST_ADMIN_EMAIL.to_string(),
        token_ttl_minutes: 15,
        session_ttl_days: 7,
    };

    let auth = AuthUseCases::new(
        users.clone(),
        email.clone(),
        TEST_BASE_URL.to_string(),
        TEST_ADMIN_EMAIL.to_string(),
        config.token_ttl_minutes,
    );
    let admin = AdminUseCases::new(admins.clone(), users.clone(), members.clone());
    let member_use_cases = MemberUseCases::new(members.clone());

    let state = AppState {
        config: Arc::new(config),
        auth: Arc::new(auth),
        admin: Arc::new(admin),
        members: Arc::new(member_use_cases),
        sessions: sessions.clone(),
    };

    TestContext {
        state,
        users,
        admins,
        members,
        email,
        sessions,
    }
}

use std::env;
use std::net::SocketAddr;

use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub redis_url: String,
    pub resend_api_key: SecretString,
    pub email_from: String,
    /// Public base URL used when constructing verification and reset links.
    pub base_url: Url,
    /// The bootstrap administrator address; signups with this email are
    /// created verified with the admin role.
    pub admin_email: String,
    pub token_ttl_minutes: i64,
    pub session_ttl_days: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:3000".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let redis_url = env::var("REDIS_URL").unwrap_or("redis://127.0.0.1:6379".to_string());

        let resend_api_key: SecretString =
            SecretString::new(env::var("RESEND_API_KEY").expect("RESEND_API_KEY must be set").into());
        let email_from = env::var("EMAIL_FROM").expect("EMAIL_FROM must be set");

        let base_url: Url = env::var("BASE_URL")
            .expect("BASE_URL must be set")
            .parse()
            .expect("BASE_URL must be a valid URL");

        let admin_email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");

        let token_ttl_minutes: i64 = env::var("TOKEN_TTL_MINUTES")
            .unwrap_or("15".to_string())
            .parse()
            .expect("TOKEN_TTL_MINUTES must be a valid number");

        let session_ttl_days: i64 = env::var("SESSION_TTL_DAYS")
            .unwrap_or("7".to_string())
            .parse()
            .expect("SESSION_TTL_DAYS must be a valid number");

        Self {
            bind_addr,
            database_url,
            redis_url,
            resend_api_key,
            email_from,
            base_url,
            admin_email,
            token_ttl_minutes,
            session_ttl_days,
        }
    }

    /// Base URL without a trailing slash, for link construction.
    pub fn base_url_str(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

use base64::Engine;
use chrono::{DateTime, Duration, Utc};

/// Issues a single-use token for email verification or password reset.
/// 32 bytes from the OS RNG, rendered URL-safe so it can be embedded in links.
pub fn issue_token(ttl_minutes: i64) -> (String, DateTime<Utc>) {
    (generate_token(), Utc::now() + Duration::minutes(ttl_minutes))
}

/// Opaque session identifier carried in the `sid` cookie.
pub fn generate_session_id() -> String {
    generate_token()
}

fn generate_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_url_safe() {
        let (a, _) = issue_token(15);
        let (b, _) = issue_token(15);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn expiry_is_in_the_future() {
        let (_, expires) = issue_token(15);
        let delta = expires - Utc::now();
        assert!(delta > Duration::minutes(14));
        assert!(delta <= Duration::minutes(15));
    }
}

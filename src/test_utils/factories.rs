use chrono::Utc;
use uuid::Uuid;

use crate::{
    application::{password::hash_password, tokens::issue_token, use_cases::auth::SignupInput},
    domain::entities::{
        admin::Admin,
        user::{User, UserRole},
    },
    test_utils::InMemoryUserRepo,
};

pub fn test_signup_input(email: &str, password: &str) -> SignupInput {
    SignupInput {
        fullname: "Test User".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
        phone: None,
        region: None,
        city: None,
        age: None,
    }
}

pub async fn test_admin(email: &str, password: &str) -> Admin {
    Admin {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: hash_password(password.to_string()).await.unwrap(),
        created_at: Utc::now(),
    }
}

/// Inserts a verified user directly, bypassing the signup flow.
pub async fn insert_verified_user(repo: &InMemoryUserRepo, email: &str, password: &str) -> User {
    let user = User {
        id: Uuid::new_v4(),
        fullname: "Verified User".to_string(),
        email: email.to_string(),
        phone: None,
        region: None,
        city: None,
        age: None,
        password_hash: hash_password(password.to_string()).await.unwrap(),
        role: UserRole::User,
        is_verified: true,
        verification_token: None,
        verification_token_expires: None,
        reset_password_token: None,
        reset_password_expires: None,
        created_at: Utc::now(),
    };
    repo.insert(user.clone());
    user
}

/// Inserts an unverified user with an outstanding verification token.
/// Returns the user and the raw token.
pub async fn insert_pending_user(
    repo: &InMemoryUserRepo,
    email: &str,
    password: &str,
) -> (User, String) {
    let (token, expires) = issue_token(15);
    let user = User {
        id: Uuid::new_v4(),
        fullname: "Pending User".to_string(),
        email: email.to_string(),
        phone: None,
        region: None,
        city: None,
        age: None,
        password_hash: hash_password(password.to_string()).await.unwrap(),
        role: UserRole::User,
        is_verified: false,
        verification_token: Some(token.clone()),
        verification_token_expires: Some(expires),
        reset_password_token: None,
        reset_password_expires: None,
        created_at: Utc::now(),
    };
    repo.insert(user.clone());
    (user, token)
}

use std::{
    collections::HashMap,
    sync::Mutex,
};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{
    application::{
        app_error::{AppError, AppResult},
        session::{SessionData, SessionStore},
        use_cases::{
            admin::AdminRepo,
            auth::{EmailSender, UserRepo},
            members::MemberRepo,
        },
    },
    domain::entities::{
        admin::Admin,
        member::{Member, NewMember},
        user::{NewUser, User},
    },
};

// ============================================================================
// InMemoryUserRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get_by_email(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    /// Backdates both token expiries, simulating natural expiry while the
    /// token values stay in storage.
    pub fn expire_tokens(&self, email: &str) {
        let mut users = self.users.lock().unwrap();
        let expired = Utc::now() - Duration::minutes(1);
        if let Some(user) = users
            .values_mut()
            .find(|u| u.email.eq_ignore_ascii_case(email))
        {
            if user.verification_token_expires.is_some() {
                user.verification_token_expires = Some(expired);
            }
            if user.reset_password_expires.is_some() {
                user.reset_password_expires = Some(expired);
            }
        }
    }
}

fn not_expired(expires: Option<DateTime<Utc>>) -> bool {
    expires.is_some_and(|e| e > Utc::now())
}

#[async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn create(&self, draft: NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&draft.email))
        {
            return Err(AppError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            fullname: draft.fullname,
            email: draft.email,
            phone: draft.phone,
            region: draft.region,
            city: draft.city,
            age: draft.age,
            password_hash: draft.password_hash,
            role: draft.role,
            is_verified: draft.is_verified,
            verification_token: draft.verification_token,
            verification_token_expires: draft.verification_token_expires,
            reset_password_token: None,
            reset_password_expires: None,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.get_by_email(email))
    }

    async fn find_by_verification_token(&self, token: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| {
                u.verification_token.as_deref() == Some(token)
                    && not_expired(u.verification_token_expires)
            })
            .cloned())
    }

    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| {
                u.reset_password_token.as_deref() == Some(token)
                    && not_expired(u.reset_password_expires)
            })
            .cloned())
    }

    async fn mark_verified(&self, user_id: Uuid) -> AppResult<()> {
        if let Some(user) = self.users.lock().unwrap().get_mut(&user_id) {
            user.is_verified = true;
            user.verification_token = None;
            user.verification_token_expires = None;
        }
        Ok(())
    }

    async fn set_verification_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires: DateTime<Utc>,
    ) -> AppResult<()> {
        if let Some(user) = self.users.lock().unwrap().get_mut(&user_id) {
            user.verification_token = Some(token.to_string());
            user.verification_token_expires = Some(expires);
        }
        Ok(())
    }

    async fn set_reset_token(
        &self,
        user_id: Uuid,
        token: &str,
        expires: DateTime<Utc>,
    ) -> AppResult<()> {
        if let Some(user) = self.users.lock().unwrap().get_mut(&user_id) {
            user.reset_password_token = Some(token.to_string());
            user.reset_password_expires = Some(expires);
        }
        Ok(())
    }

    async fn set_password_and_clear_reset(
        &self,
        user_id: Uuid,
        password_hash: &str,
    ) -> AppResult<()> {
        if let Some(user) = self.users.lock().unwrap().get_mut(&user_id) {
            user.password_hash = password_hash.to_string();
            user.reset_password_token = None;
            user.reset_password_expires = None;
        }
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }
}

// ============================================================================
// InMemoryAdminRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryAdminRepo {
    admins: Mutex<Vec<Admin>>,
}

impl InMemoryAdminRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, admin: Admin) {
        self.admins.lock().unwrap().push(admin);
    }
}

#[async_trait]
impl AdminRepo for InMemoryAdminRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

// ============================================================================
// InMemoryMemberRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryMemberRepo {
    members: Mutex<Vec<Member>>,
}

impl InMemoryMemberRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.members.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<Member> {
        self.members.lock().unwrap().clone()
    }
}

#[async_trait]
impl MemberRepo for InMemoryMemberRepo {
    async fn create(&self, draft: NewMember) -> AppResult<Member> {
        let member = Member {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            message: draft.message,
            joined_at: Utc::now(),
        };
        self.members.lock().unwrap().push(member.clone());
        Ok(member)
    }

    async fn list_all(&self) -> AppResult<Vec<Member>> {
        Ok(self.all())
    }
}

// ============================================================================
// MockEmailSender
// ============================================================================

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Default)]
pub struct MockEmailSender {
    sent: Mutex<Vec<SentEmail>>,
    fail: bool,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose transport always fails, for delivery-error paths.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Delivery("mock transport failure".into()));
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

// ============================================================================
// InMemorySessionStore
// ============================================================================

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionData>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session_id: &str) -> Option<SessionData> {
        self.sessions.lock().unwrap().get(session_id).cloned()
    }

    pub fn count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionData>> {
        Ok(self.get(session_id))
    }

    async fn save(&self, session_id: &str, data: &SessionData) -> AppResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session_id.to_string(), data.clone());
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        self.sessions.lock().unwrap().remove(session_id);
        Ok(())
    }
}

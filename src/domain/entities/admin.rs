use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A pre-provisioned administrator identity, separate from regular users.
/// Admins have no verification or password-recovery flow.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

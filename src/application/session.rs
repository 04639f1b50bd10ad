use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::app_error::AppResult;

/// Server-held session state, keyed by the opaque identifier in the `sid`
/// cookie. Carries at most one user reference and at most one admin
/// reference; the two route guards check their own field independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: Option<Uuid>,
    pub user_name: Option<String>,
    pub admin_id: Option<Uuid>,
}

impl SessionData {
    pub fn for_user(user_id: Uuid, user_name: String) -> Self {
        Self {
            user_id: Some(user_id),
            user_name: Some(user_name),
            admin_id: None,
        }
    }

    pub fn for_admin(admin_id: Uuid) -> Self {
        Self {
            user_id: None,
            user_name: None,
            admin_id: Some(admin_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.admin_id.is_some()
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionData>>;
    async fn save(&self, session_id: &str, data: &SessionData) -> AppResult<()>;
    async fn destroy(&self, session_id: &str) -> AppResult<()>;
}

use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::application::{
    app_error::{AppError, AppResult},
    session::{SessionData, SessionStore},
};

/// Redis-backed session store. Each session is a JSON value under an opaque
/// key with a fixed TTL; destroying the key logs the client out everywhere.
#[derive(Clone)]
pub struct RedisSessionStore {
    manager: ConnectionManager,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub async fn new(redis_url: &str, ttl_days: i64) -> AppResult<Self> {
        let client = redis::Client::open(redis_url).map_err(|e| {
            AppError::Internal(format!(
                "Redis connection failed (check redis password/URL): {e}"
            ))
        })?;
        let manager = ConnectionManager::new(client).await.map_err(|e| {
            AppError::Internal(format!(
                "Redis auth/connection failed (check redis password/URL): {e}"
            ))
        })?;

        Ok(Self {
            manager,
            ttl_secs: (ttl_days.max(1) as u64) * 24 * 60 * 60,
        })
    }

    fn key(session_id: &str) -> String {
        format!("sess:{session_id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionData>> {
        let mut conn = self.manager.clone();
        let raw: Option<String> = conn
            .get(Self::key(session_id))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        raw.map(|value| {
            serde_json::from_str(&value).map_err(|e| AppError::Internal(e.to_string()))
        })
        .transpose()
    }

    async fn save(&self, session_id: &str, data: &SessionData) -> AppResult<()> {
        let mut conn = self.manager.clone();
        let value =
            serde_json::to_string(data).map_err(|e| AppError::Internal(e.to_string()))?;
        let _: () = conn
            .set_ex(Self::key(session_id), value, self.ttl_secs)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        let mut conn = self.manager.clone();
        let _: () = conn
            .del(Self::key(session_id))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(())
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    application::app_error::{AppError, AppResult},
    domain::entities::member::{Member, NewMember},
};

#[async_trait]
pub trait MemberRepo: Send + Sync {
    async fn create(&self, member: NewMember) -> AppResult<Member>;
    async fn list_all(&self) -> AppResult<Vec<Member>>;
}

/// Interest submissions from the join form. Append-only.
pub struct MemberUseCases {
    members: Arc<dyn MemberRepo>,
}

impl MemberUseCases {
    pub fn new(members: Arc<dyn MemberRepo>) -> Self {
        Self { members }
    }

    #[instrument(skip(self, submission), fields(email = %submission.email))]
    pub async fn submit(&self, submission: NewMember) -> AppResult<Member> {
        if submission.name.trim().is_empty() || submission.email.trim().is_empty() {
            return Err(AppError::Validation(
                "Name and email are required.".to_string(),
            ));
        }
        self.members.create(submission).await
    }
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::{Profile, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Profile>, ProfileQueryError>;
}

use async_trait::async_trait;

use crate::auth::application::domain::entities::{Profile, UserId};
use crate::auth::application::ports::outgoing::ProfileQuery;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Profile, FetchProfileError>;
}

#[derive(Debug, Clone)]
pub struct FetchProfileUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchProfileUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchProfileUseCase for FetchProfileUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Profile, FetchProfileError> {
        self.query
            .find_by_user(user_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .ok_or(FetchProfileError::ProfileNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::ProfileQueryError;

    struct FailingProfileQuery;

    #[async_trait]
    impl ProfileQuery for FailingProfileQuery {
        async fn find_by_user(
            &self,
            _user_id: UserId,
        ) -> Result<Option<Profile>, ProfileQueryError> {
            Err(ProfileQueryError::DatabaseError("pool timed out".to_string()))
        }
    }

    struct EmptyProfileQuery;

    #[async_trait]
    impl ProfileQuery for EmptyProfileQuery {
        async fn find_by_user(
            &self,
            _user_id: UserId,
        ) -> Result<Option<Profile>, ProfileQueryError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn missing_profile() {
        let result = FetchProfileUseCase::new(EmptyProfileQuery)
            .execute(UserId::new())
            .await;

        assert_eq!(result.unwrap_err(), FetchProfileError::ProfileNotFound);
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let result = FetchProfileUseCase::new(FailingProfileQuery)
            .execute(UserId::new())
            .await;

        assert!(matches!(result, Err(FetchProfileError::QueryError(msg)) if msg.contains("pool timed out")));
    }
}

use std::sync::Arc;

use crate::auth::application::domain::entities::{PhoneNumber, UserId};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum PhoneNumberGuardError {
    #[error("User with this phone number already exists.")]
    Taken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Pre-save uniqueness check for `users.phone_number`.
///
/// The lookup and the following write are not atomic: two concurrent saves
/// can both pass the check. The unique index on the column settles that race
/// and repositories report its violation as `PhoneNumberTaken`.
#[derive(Clone)]
pub struct PhoneNumberGuard {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl PhoneNumberGuard {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    /// `owner` is the identity being saved; `None` for a user not stored yet.
    pub async fn ensure_available(
        &self,
        phone_number: &PhoneNumber,
        owner: Option<UserId>,
    ) -> Result<(), PhoneNumberGuardError> {
        match self.user_query.find_by_phone_number(phone_number).await {
            Ok(Some(existing)) if Some(existing.id) != owner => Err(PhoneNumberGuardError::Taken),
            Ok(_) => Ok(()),
            Err(UserQueryError::DatabaseError(msg)) => {
                Err(PhoneNumberGuardError::RepositoryError(msg))
            }
        }
    }
}

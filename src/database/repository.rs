use async_trait::async_trait;
use thiserror::Error;

use super::models::user::{NewUser, UserRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered: {0}")]
    Duplicate(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query error: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            other => StoreError::Query(other.to_string()),
        }
    }
}

/// Persistence for user records. Emails are stored already normalized.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Fails with `StoreError::Duplicate` when the email is taken.
    async fn insert(&self, new_user: NewUser) -> Result<UserRecord, StoreError>;

    /// All users, oldest first.
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::models::user::{NewUser, UserRecord};
use super::repository::{StoreError, UserRepository};

/// In-process user store, used when no DATABASE_URL is configured.
#[derive(Default)]
pub struct MemoryUserRepository {
    // keyed by normalized email
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(StoreError::Duplicate(new_user.email));
        }

        let record = UserRecord::from_new(new_user);
        users.insert(record.email.clone(), record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        let users = self.users.read().await;
        let mut all: Vec<UserRecord> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

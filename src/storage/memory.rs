//! In-memory user store: a mutex-guarded ordered map keyed by id.

use crate::domain::user::{NewUser, User, UserPatch};
use crate::storage::store::{StoreError, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// Process-lifetime user collection.
///
/// A single mutex serializes every operation, so the check-then-act pairs
/// (email uniqueness before a write, next-id assignment) cannot interleave
/// across concurrent requests.
pub struct InMemoryUserStore {
    inner: Mutex<Collection>,
}

struct Collection {
    users: BTreeMap<i64, User>,
    /// Next id to assign. Monotone: ids of deleted records are never reused.
    next_id: i64,
}

impl InMemoryUserStore {
    /// Creates a store holding the given records; the id counter starts one
    /// past the highest seeded id.
    pub fn new(seed: Vec<User>) -> Self {
        let users: BTreeMap<i64, User> = seed.into_iter().map(|u| (u.id, u)).collect();
        let next_id = users.keys().next_back().copied().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Collection { users, next_id }),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().await;
        if inner.users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let id = inner.next_id;
        inner.next_id += 1;
        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().await;
        if !inner.users.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        if let Some(email) = patch.email.as_deref() {
            if inner.users.values().any(|u| u.id != id && u.email == email) {
                return Err(StoreError::DuplicateEmail);
            }
        }
        let user = match inner.users.get_mut(&id) {
            Some(u) => u,
            None => return Err(StoreError::NotFound),
        };
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        user.updated_at = Some(Utc::now());
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.users.remove(&id).ok_or(StoreError::NotFound)
    }
}

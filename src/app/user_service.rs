//! Service layer over the user store.
//!
//! Owns input validation (presence checks), pagination math, and the mapping
//! from store outcomes to service errors, keeping the HTTP handlers thin.
//! The layer only talks to [`UserStore`], so the in-memory backing can be
//! swapped for a persistent one without touching this contract.

use crate::domain::user::{NewUser, User, UserPatch};
use crate::storage::store::{StoreError, UserStore};
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Request-level failure. The display string is the client-facing message.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Name and email are required")]
    MissingFields,
    #[error("No data provided")]
    EmptyUpdate,
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("User not found")]
    NotFound,
    /// Unclassified fault. The cause is logged at the transport boundary and
    /// never echoed to the client.
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ServiceError::DuplicateEmail,
            StoreError::NotFound => ServiceError::NotFound,
        }
    }
}

/// One page of the collection plus the figures the list endpoint reports.
#[derive(Debug)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Returns the slice `[(page-1)*limit, (page-1)*limit + limit)` of the
    /// collection in id order. An out-of-range page yields an empty slice,
    /// not an error. `page` and `limit` are clamped to at least 1.
    pub async fn list(&self, page: Option<u32>, limit: Option<u32>) -> Result<UserPage, ServiceError> {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);

        let users = self.store.list().await?;
        let total = users.len() as u64;
        let total_pages = (total + u64::from(limit) - 1) / u64::from(limit);
        let start = (page as usize - 1).saturating_mul(limit as usize);
        let users = users.into_iter().skip(start).take(limit as usize).collect();

        Ok(UserPage {
            users,
            total,
            page,
            limit,
            total_pages,
        })
    }

    pub async fn get(&self, id: i64) -> Result<User, ServiceError> {
        self.store.get(id).await?.ok_or(ServiceError::NotFound)
    }

    pub async fn create(&self, new_user: NewUser) -> Result<User, ServiceError> {
        if new_user.name.trim().is_empty() || new_user.email.trim().is_empty() {
            return Err(ServiceError::MissingFields);
        }
        Ok(self.store.insert(new_user).await?)
    }

    /// Applies a partial update. The existence check runs first so a missing
    /// id reports not-found even when the body is absent or empty.
    pub async fn update(&self, id: i64, patch: Option<UserPatch>) -> Result<User, ServiceError> {
        if self.store.get(id).await?.is_none() {
            return Err(ServiceError::NotFound);
        }
        let patch = patch
            .filter(|p| !p.is_empty())
            .ok_or(ServiceError::EmptyUpdate)?;
        Ok(self.store.update(id, patch).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<User, ServiceError> {
        Ok(self.store.delete(id).await?)
    }
}

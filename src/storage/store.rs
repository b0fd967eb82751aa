//! Store abstraction over the user collection.

use crate::domain::user::{NewUser, User, UserPatch};
use async_trait::async_trait;
use thiserror::Error;

/// Failures a store operation can report.
///
/// A persistent backend would extend this with its own failure variant; the
/// service layer maps anything it does not recognize to an internal error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("email already exists")]
    DuplicateEmail,
    /// No record carries the requested id.
    #[error("user not found")]
    NotFound,
}

/// Storage seam for the user collection.
///
/// Data invariants (id uniqueness, email uniqueness) are enforced here, each
/// check and the mutation it guards inside a single critical section, so the
/// service-layer contract survives a swap to a real database backend.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every record, in id order (equals insertion order: ids are monotone).
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// The record with the given id, if present.
    async fn get(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Assigns the next id, stamps `created_at`, and appends the record.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if the email is already
    /// taken.
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Applies the provided fields in place and stamps `updated_at`.
    ///
    /// Fails with [`StoreError::NotFound`] if the id is absent, or with
    /// [`StoreError::DuplicateEmail`] if the patch carries an email already
    /// used by a different record.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, StoreError>;

    /// Removes the record, returning its final snapshot.
    async fn delete(&self, id: i64) -> Result<User, StoreError>;
}

//! User-store collaborator consumed by principal resolution.
//!
//! Persistence is out of scope for this crate: the backend supplies an
//! implementation backed by its database, tests use an in-memory map.

use async_trait::async_trait;

use crate::error::AuthError;

/// User record as surfaced by the external store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
}

/// Lookup interface for principal resolution.
///
/// This crate imposes no timeout and performs no retries; a store failure
/// propagates immediately as `AuthError::Internal`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by identifier. `Ok(None)` when no record exists.
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, AuthError>;
}

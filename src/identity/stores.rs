//! Identity store contracts.
//!
//! Split the way identity frameworks split them: the base trait covers
//! persistence, the password and security-stamp traits extend it with
//! field accessors. The accessor methods touch the in-memory record
//! only; nothing is persisted until `update` is called.

use async_trait::async_trait;

use crate::errors::AppResult;

/// Base user persistence contract.
#[async_trait]
pub trait UserStore<U: Send + Sync>: Send + Sync {
    /// Persist a new user. The caller supplies the id.
    async fn create(&self, user: &U) -> AppResult<()>;

    /// Persist changes to an existing user.
    async fn update(&self, user: &U) -> AppResult<()>;

    /// Remove a user.
    async fn delete(&self, user: &U) -> AppResult<()>;

    /// Look up a user by id, case-insensitively.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<U>>;

    /// Look up a user by name, case-insensitively.
    async fn find_by_name(&self, user_name: &str) -> AppResult<Option<U>>;
}

/// Password hash accessors on top of [`UserStore`].
pub trait UserPasswordStore<U: Send + Sync>: UserStore<U> {
    /// Set the hash on the in-memory record.
    fn set_password_hash(&self, user: &mut U, hash: Option<String>);

    /// Read the hash off the record.
    fn password_hash(&self, user: &U) -> Option<String>;

    /// Whether the record carries a hash.
    fn has_password(&self, user: &U) -> bool;
}

/// Security stamp accessors on top of [`UserStore`].
///
/// The stamp changes whenever credentials change, invalidating
/// anything issued against the old credentials.
pub trait UserSecurityStampStore<U: Send + Sync>: UserStore<U> {
    /// Set the stamp on the in-memory record.
    fn set_security_stamp(&self, user: &mut U, stamp: String);

    /// Read the stamp off the record.
    fn security_stamp(&self, user: &U) -> Option<String>;
}

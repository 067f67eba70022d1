//! Application user wrapped by the identity store adapter.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Application-level user record.
///
/// Invariant: a user always carries a non-empty unique id from the
/// moment it is constructed; `new` assigns a fresh UUID so callers
/// never see an id-less user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationUser {
    pub id: String,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    #[serde(skip_serializing)]
    pub security_stamp: Option<String>,
}

impl ApplicationUser {
    /// Create a user with a freshly generated id.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_name: user_name.into(),
            password_hash: None,
            security_stamp: None,
        }
    }

    /// Rehydrate a user from stored fields.
    pub fn from_parts(
        id: String,
        user_name: String,
        password_hash: Option<String>,
        security_stamp: Option<String>,
    ) -> Self {
        Self {
            id,
            user_name,
            password_hash,
            security_stamp,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// Login name
    #[schema(example = "carson.alexander")]
    pub user_name: String,
}

impl From<ApplicationUser> for UserResponse {
    fn from(user: ApplicationUser) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_non_empty_id() {
        let user = ApplicationUser::new("carson.alexander");
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_new_users_have_unique_ids() {
        let a = ApplicationUser::new("a");
        let b = ApplicationUser::new("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_user_has_no_password_or_stamp() {
        let user = ApplicationUser::new("carson.alexander");
        assert!(user.password_hash.is_none());
        assert!(user.security_stamp.is_none());
    }
}

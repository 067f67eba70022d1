//! Framework-facing user record persisted by the entity user store.

use uuid::Uuid;

use crate::domain::ApplicationUser;

/// User shape the identity store contracts operate on.
///
/// Carries exactly the fields the store traits need. Application code
/// works with [`ApplicationUser`] and crosses this boundary through
/// the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityUser {
    pub id: String,
    pub user_name: String,
    pub password_hash: Option<String>,
    pub security_stamp: Option<String>,
}

impl IdentityUser {
    /// Create an identity user with a freshly generated id.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_name: user_name.into(),
            password_hash: None,
            security_stamp: None,
        }
    }
}

impl From<&ApplicationUser> for IdentityUser {
    fn from(user: &ApplicationUser) -> Self {
        Self {
            id: user.id.clone(),
            user_name: user.user_name.clone(),
            password_hash: user.password_hash.clone(),
            security_stamp: user.security_stamp.clone(),
        }
    }
}

impl From<IdentityUser> for ApplicationUser {
    fn from(user: IdentityUser) -> Self {
        ApplicationUser::from_parts(
            user.id,
            user.user_name,
            user.password_hash,
            user.security_stamp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_identity_user_has_unique_id() {
        let a = IdentityUser::new("x");
        let b = IdentityUser::new("x");
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let mut app = ApplicationUser::new("carson.alexander");
        app.password_hash = Some("hash".into());
        app.security_stamp = Some("stamp".into());

        let identity = IdentityUser::from(&app);
        let back = ApplicationUser::from(identity);

        assert_eq!(app, back);
    }
}

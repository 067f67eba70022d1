//! Authentication service tests over an in-memory identity store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use registrar_api::config::Config;
use registrar_api::domain::ApplicationUser;
use registrar_api::errors::{AppError, AppResult};
use registrar_api::identity::{UserPasswordStore, UserSecurityStampStore, UserStore};
use registrar_api::services::{AuthService, Authenticator};

/// In-memory application user store keyed by user id.
#[derive(Default)]
struct InMemoryAppUserStore {
    users: Mutex<HashMap<String, ApplicationUser>>,
}

#[async_trait]
impl UserStore<ApplicationUser> for InMemoryAppUserStore {
    async fn create(&self, user: &ApplicationUser) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.id) {
            return Err(AppError::conflict("User"));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &ApplicationUser) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn delete(&self, user: &ApplicationUser) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        users.remove(&user.id).map(|_| ()).ok_or(AppError::NotFound)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ApplicationUser>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.id.to_lowercase() == id.to_lowercase())
            .cloned())
    }

    async fn find_by_name(&self, user_name: &str) -> AppResult<Option<ApplicationUser>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.user_name.to_lowercase() == user_name.to_lowercase())
            .cloned())
    }
}

impl UserPasswordStore<ApplicationUser> for InMemoryAppUserStore {
    fn set_password_hash(&self, user: &mut ApplicationUser, hash: Option<String>) {
        user.password_hash = hash;
    }

    fn password_hash(&self, user: &ApplicationUser) -> Option<String> {
        user.password_hash.clone()
    }

    fn has_password(&self, user: &ApplicationUser) -> bool {
        user.password_hash.is_some()
    }
}

impl UserSecurityStampStore<ApplicationUser> for InMemoryAppUserStore {
    fn set_security_stamp(&self, user: &mut ApplicationUser, stamp: String) {
        user.security_stamp = Some(stamp);
    }

    fn security_stamp(&self, user: &ApplicationUser) -> Option<String> {
        user.security_stamp.clone()
    }
}

fn authenticator() -> Authenticator<InMemoryAppUserStore> {
    // Debug builds fall back to the development JWT secret
    Authenticator::new(Arc::new(InMemoryAppUserStore::default()), Config::from_env())
}

#[tokio::test]
async fn test_register_hashes_password_and_stamps() {
    let auth = authenticator();

    let user = auth
        .register("carson.alexander".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    assert!(!user.id.is_empty());
    assert_eq!(user.user_name, "carson.alexander");
    // The plain text must never be stored
    let hash = user.password_hash.expect("hash must be set");
    assert_ne!(hash, "SecurePass123!");
    assert!(user.security_stamp.is_some());
}

#[tokio::test]
async fn test_register_duplicate_name_is_conflict() {
    let auth = authenticator();

    auth.register("carson.alexander".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    let result = auth
        .register("Carson.Alexander".to_string(), "OtherPass456!".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let auth = authenticator();

    let result = auth
        .register("carson.alexander".to_string(), "short".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_login_returns_verifiable_token() {
    let auth = authenticator();

    auth.register("carson.alexander".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    let token = auth
        .login("carson.alexander".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    assert_eq!(token.token_type, "Bearer");
    assert!(token.expires_in > 0);

    let claims = auth.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.user_name, "carson.alexander");
    assert!(!claims.sub.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password_is_rejected() {
    let auth = authenticator();

    auth.register("carson.alexander".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    let result = auth
        .login("carson.alexander".to_string(), "WrongPass123!".to_string())
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_unknown_user_is_rejected() {
    let auth = authenticator();

    let result = auth
        .login("nobody".to_string(), "SecurePass123!".to_string())
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_change_password_rotates_credentials() {
    let auth = authenticator();

    let user = auth
        .register("carson.alexander".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    auth.change_password(
        &user.id,
        "SecurePass123!".to_string(),
        "EvenMoreSecure456!".to_string(),
    )
    .await
    .unwrap();

    // Old password no longer works, new one does
    let old_login = auth
        .login("carson.alexander".to_string(), "SecurePass123!".to_string())
        .await;
    assert!(matches!(old_login, Err(AppError::InvalidCredentials)));

    auth.login(
        "carson.alexander".to_string(),
        "EvenMoreSecure456!".to_string(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_change_password_requires_current_password() {
    let auth = authenticator();

    let user = auth
        .register("carson.alexander".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    let result = auth
        .change_password(
            &user.id,
            "WrongCurrent123!".to_string(),
            "EvenMoreSecure456!".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

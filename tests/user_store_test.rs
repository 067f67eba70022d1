//! Identity store adapter tests.
//!
//! Exercises the ApplicationUserStore adapter against an in-memory
//! identity store, covering the conversion and copy-back behavior and
//! the case-insensitive lookups.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use registrar_api::domain::ApplicationUser;
use registrar_api::errors::{AppError, AppResult};
use registrar_api::identity::{
    ApplicationUserStore, IdentityUser, UserPasswordStore, UserSecurityStampStore, UserStore,
};

/// In-memory identity store keyed by user id.
#[derive(Default)]
struct InMemoryUserStore {
    users: Mutex<HashMap<String, IdentityUser>>,
}

#[async_trait]
impl UserStore<IdentityUser> for InMemoryUserStore {
    async fn create(&self, user: &IdentityUser) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.id) {
            return Err(AppError::conflict("User"));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &IdentityUser) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn delete(&self, user: &IdentityUser) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        users.remove(&user.id).map(|_| ()).ok_or(AppError::NotFound)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<IdentityUser>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.id.to_lowercase() == id.to_lowercase())
            .cloned())
    }

    async fn find_by_name(&self, user_name: &str) -> AppResult<Option<IdentityUser>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.user_name.to_lowercase() == user_name.to_lowercase())
            .cloned())
    }
}

impl UserPasswordStore<IdentityUser> for InMemoryUserStore {
    fn set_password_hash(&self, user: &mut IdentityUser, hash: Option<String>) {
        user.password_hash = hash;
    }

    fn password_hash(&self, user: &IdentityUser) -> Option<String> {
        user.password_hash.clone()
    }

    fn has_password(&self, user: &IdentityUser) -> bool {
        user.password_hash.is_some()
    }
}

impl UserSecurityStampStore<IdentityUser> for InMemoryUserStore {
    fn set_security_stamp(&self, user: &mut IdentityUser, stamp: String) {
        user.security_stamp = Some(stamp);
    }

    fn security_stamp(&self, user: &IdentityUser) -> Option<String> {
        user.security_stamp.clone()
    }
}

fn adapter() -> ApplicationUserStore<InMemoryUserStore> {
    ApplicationUserStore::new(InMemoryUserStore::default())
}

#[tokio::test]
async fn test_create_and_find_round_trip_preserves_all_fields() {
    let store = adapter();

    let mut user = ApplicationUser::new("Carson.Alexander");
    store.set_password_hash(&mut user, Some("hash".to_string()));
    store.set_security_stamp(&mut user, "stamp".to_string());

    store.create(&user).await.unwrap();

    let found = store.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(found, user);
    assert_eq!(found.password_hash.as_deref(), Some("hash"));
    assert_eq!(found.security_stamp.as_deref(), Some("stamp"));
}

#[tokio::test]
async fn test_find_by_id_is_case_insensitive() {
    let store = adapter();

    let user = ApplicationUser::new("carson.alexander");
    store.create(&user).await.unwrap();

    let found = store.find_by_id(&user.id.to_uppercase()).await.unwrap();
    assert_eq!(found.unwrap().id, user.id);
}

#[tokio::test]
async fn test_find_by_name_is_case_insensitive() {
    let store = adapter();

    let user = ApplicationUser::new("Carson.Alexander");
    store.create(&user).await.unwrap();

    let found = store.find_by_name("CARSON.alexander").await.unwrap();
    assert_eq!(found.unwrap().id, user.id);

    let missing = store.find_by_name("peggy.justice").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_new_users_always_carry_a_fresh_id() {
    let a = ApplicationUser::new("meredith.alonso");
    let b = ApplicationUser::new("meredith.alonso");

    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_password_accessors_touch_memory_only() {
    let store = adapter();

    let mut user = ApplicationUser::new("arturo.anand");
    store.create(&user).await.unwrap();

    // Setting the hash must not reach the store until update is called
    store.set_password_hash(&mut user, Some("new-hash".to_string()));
    assert!(store.has_password(&user));

    let stored = store.find_by_id(&user.id).await.unwrap().unwrap();
    assert!(stored.password_hash.is_none());

    store.update(&user).await.unwrap();
    let stored = store.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.password_hash.as_deref(), Some("new-hash"));
}

#[tokio::test]
async fn test_security_stamp_accessors() {
    let store = adapter();

    let mut user = ApplicationUser::new("gytis.barzdukas");
    assert!(store.security_stamp(&user).is_none());

    store.set_security_stamp(&mut user, "stamp-1".to_string());
    assert_eq!(store.security_stamp(&user).as_deref(), Some("stamp-1"));

    store.set_security_stamp(&mut user, "stamp-2".to_string());
    assert_eq!(store.security_stamp(&user).as_deref(), Some("stamp-2"));
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let store = adapter();

    let user = ApplicationUser::new("laura.norman");
    let result = store.update(&user).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_removes_the_user() {
    let store = adapter();

    let user = ApplicationUser::new("nino.olivetto");
    store.create(&user).await.unwrap();

    store.delete(&user).await.unwrap();
    assert!(store.find_by_id(&user.id).await.unwrap().is_none());

    let result = store.delete(&user).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

//! Adapter exposing the identity store contracts over
//! [`ApplicationUser`].
//!
//! Bridges the application's own user record onto the framework-facing
//! contracts by converting to [`IdentityUser`] on the way in and
//! copying every field back on the way out. Generic over the inner
//! store so the adapter itself can be exercised against an in-memory
//! store in tests.

use async_trait::async_trait;

use super::entity_user_store::EntityUserStore;
use super::identity_user::IdentityUser;
use super::stores::{UserPasswordStore, UserSecurityStampStore, UserStore};
use crate::domain::ApplicationUser;
use crate::errors::AppResult;

/// Identity store adapter for [`ApplicationUser`].
pub struct ApplicationUserStore<S = EntityUserStore> {
    inner: S,
}

impl<S> ApplicationUserStore<S>
where
    S: UserPasswordStore<IdentityUser> + UserSecurityStampStore<IdentityUser>,
{
    /// Wrap an inner identity store.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S> UserStore<ApplicationUser> for ApplicationUserStore<S>
where
    S: UserPasswordStore<IdentityUser> + UserSecurityStampStore<IdentityUser>,
{
    async fn create(&self, user: &ApplicationUser) -> AppResult<()> {
        self.inner.create(&IdentityUser::from(user)).await
    }

    async fn update(&self, user: &ApplicationUser) -> AppResult<()> {
        self.inner.update(&IdentityUser::from(user)).await
    }

    async fn delete(&self, user: &ApplicationUser) -> AppResult<()> {
        self.inner.delete(&IdentityUser::from(user)).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<ApplicationUser>> {
        let result = self.inner.find_by_id(id).await?;
        Ok(result.map(ApplicationUser::from))
    }

    async fn find_by_name(&self, user_name: &str) -> AppResult<Option<ApplicationUser>> {
        let result = self.inner.find_by_name(user_name).await?;
        Ok(result.map(ApplicationUser::from))
    }
}

impl<S> UserPasswordStore<ApplicationUser> for ApplicationUserStore<S>
where
    S: UserPasswordStore<IdentityUser> + UserSecurityStampStore<IdentityUser>,
{
    fn set_password_hash(&self, user: &mut ApplicationUser, hash: Option<String>) {
        let mut identity = IdentityUser::from(&*user);
        self.inner.set_password_hash(&mut identity, hash);
        user.password_hash = identity.password_hash;
    }

    fn password_hash(&self, user: &ApplicationUser) -> Option<String> {
        self.inner.password_hash(&IdentityUser::from(user))
    }

    fn has_password(&self, user: &ApplicationUser) -> bool {
        self.inner.has_password(&IdentityUser::from(user))
    }
}

impl<S> UserSecurityStampStore<ApplicationUser> for ApplicationUserStore<S>
where
    S: UserPasswordStore<IdentityUser> + UserSecurityStampStore<IdentityUser>,
{
    fn set_security_stamp(&self, user: &mut ApplicationUser, stamp: String) {
        let mut identity = IdentityUser::from(&*user);
        self.inner.set_security_stamp(&mut identity, stamp);
        user.security_stamp = identity.security_stamp;
    }

    fn security_stamp(&self, user: &ApplicationUser) -> Option<String> {
        self.inner.security_stamp(&IdentityUser::from(user))
    }
}

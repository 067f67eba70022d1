//! Identity layer - User store contracts and adapters
//!
//! Defines the user store contracts (persistence, password hash,
//! security stamp), a SeaORM-backed store implementing them, and the
//! adapter that exposes them over the application's own user record.

mod application_user_store;
mod entity_user_store;
mod identity_user;
mod stores;

pub use application_user_store::ApplicationUserStore;
pub use entity_user_store::EntityUserStore;
pub use identity_user::IdentityUser;
pub use stores::{UserPasswordStore, UserSecurityStampStore, UserStore};

//! SeaORM-backed identity user store.
//!
//! Holds the pooled connection and checks a connection out per
//! operation, so no database context outlives a single call. Name and
//! id lookups compare case-insensitively; the username index in the
//! schema is built on `LOWER("UserName")` to keep those lookups
//! indexed.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoSimpleExpr, QueryFilter,
};

use super::identity_user::IdentityUser;
use super::stores::{UserPasswordStore, UserSecurityStampStore, UserStore};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::application_user;

fn to_identity_user(model: application_user::Model) -> IdentityUser {
    IdentityUser {
        id: model.id,
        user_name: model.user_name,
        password_hash: model.password_hash,
        security_stamp: model.security_stamp,
    }
}

fn lower_eq(column: application_user::Column, value: &str) -> Condition {
    Condition::all()
        .add(Expr::expr(Func::lower(column.into_simple_expr())).eq(value.to_lowercase()))
}

/// Entity-backed store implementing the identity contracts for
/// [`IdentityUser`].
pub struct EntityUserStore {
    db: DatabaseConnection,
}

impl EntityUserStore {
    /// Create new store instance over a pooled connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore<IdentityUser> for EntityUserStore {
    async fn create(&self, user: &IdentityUser) -> AppResult<()> {
        let active_model = application_user::ActiveModel {
            id: ActiveValue::Set(user.id.clone()),
            user_name: ActiveValue::Set(user.user_name.clone()),
            password_hash: ActiveValue::Set(user.password_hash.clone()),
            security_stamp: ActiveValue::Set(user.security_stamp.clone()),
        };

        active_model.insert(&self.db).await?;
        Ok(())
    }

    async fn update(&self, user: &IdentityUser) -> AppResult<()> {
        let active_model = application_user::ActiveModel {
            id: ActiveValue::Unchanged(user.id.clone()),
            user_name: ActiveValue::Set(user.user_name.clone()),
            password_hash: ActiveValue::Set(user.password_hash.clone()),
            security_stamp: ActiveValue::Set(user.security_stamp.clone()),
        };

        match active_model.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, user: &IdentityUser) -> AppResult<()> {
        let result = application_user::Entity::delete_by_id(user.id.clone())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<IdentityUser>> {
        let result = application_user::Entity::find()
            .filter(lower_eq(application_user::Column::Id, id))
            .one(&self.db)
            .await?;

        Ok(result.map(to_identity_user))
    }

    async fn find_by_name(&self, user_name: &str) -> AppResult<Option<IdentityUser>> {
        let result = application_user::Entity::find()
            .filter(lower_eq(application_user::Column::UserName, user_name))
            .one(&self.db)
            .await?;

        Ok(result.map(to_identity_user))
    }
}

impl UserPasswordStore<IdentityUser> for EntityUserStore {
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

impl UserSecurityStampStore<IdentityUser> for EntityUserStore {
    fn set_security_stamp(&self, user: &mut IdentityUser, stamp: String) {
        user.security_stamp = Some(stamp);
    }

    fn security_stamp(&self, user: &IdentityUser) -> Option<String> {
        user.security_stamp.clone()
    }
}

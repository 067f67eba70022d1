//! ApplicationUser table backing the identity user store.
//!
//! The id is a caller-supplied UUID string, never database-generated.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ApplicationUser")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Id")]
    pub id: String,
    #[sea_orm(column_name = "UserName", unique)]
    pub user_name: String,
    #[sea_orm(column_name = "PasswordHash")]
    pub password_hash: Option<String>,
    #[sea_orm(column_name = "SecurityStamp")]
    pub security_stamp: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! Department table.
//!
//! Reads go through the entity; writes go through the
//! Department_Insert/Update/Delete stored procedures, which maintain
//! the `RowVersion` concurrency token.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Department")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "DepartmentID")]
    pub id: i32,
    #[sea_orm(column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "Budget")]
    pub budget: f64,
    #[sea_orm(column_name = "StartDate")]
    pub start_date: DateTimeUtc,
    #[sea_orm(column_name = "InstructorID")]
    pub instructor_id: Option<i32>,
    #[sea_orm(column_name = "RowVersion")]
    pub row_version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

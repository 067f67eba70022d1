//! OfficeAssignment table.
//!
//! One-to-zero-or-one with Person; the instructor id is the key.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "OfficeAssignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "InstructorID")]
    pub instructor_id: i32,
    #[sea_orm(column_name = "Location")]
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::InstructorId",
        to = "super::person::Column::Id"
    )]
    Person,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

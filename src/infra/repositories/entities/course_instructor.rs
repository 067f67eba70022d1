//! CourseInstructor join table.
//!
//! Explicit many-to-many mapping between Course and Person with a
//! composite primary key (CourseID, InstructorID).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "CourseInstructor")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "CourseID")]
    pub course_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "InstructorID")]
    pub instructor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::InstructorId",
        to = "super::person::Column::Id"
    )]
    Person,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

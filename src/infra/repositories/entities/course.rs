//! Course table.
//!
//! The primary key is the registrar-assigned course number, so the
//! column is deliberately not auto-incrementing.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Course")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "CourseID")]
    pub id: i32,
    #[sea_orm(column_name = "Title")]
    pub title: String,
    #[sea_orm(column_name = "Credits")]
    pub credits: i32,
    #[sea_orm(column_name = "DepartmentID")]
    pub department_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

// Many-to-many to Person through the CourseInstructor join table
impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_instructor::Relation::Person.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_instructor::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

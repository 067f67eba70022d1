//! Enrollment table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Enrollment")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "EnrollmentID")]
    pub id: i32,
    #[sea_orm(column_name = "CourseID")]
    pub course_id: i32,
    #[sea_orm(column_name = "StudentID")]
    pub student_id: i32,
    /// Letter grade, null until posted
    #[sea_orm(column_name = "Grade")]
    pub grade: Option<String>,
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
        from = "Column::StudentId",
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

//! Person table - students and instructors in one table.
//!
//! The `Discriminator` column tells the two apart; `EnrollmentDate`
//! is populated for students and `HireDate` for instructors.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Person")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ID")]
    pub id: i32,
    #[sea_orm(column_name = "LastName")]
    pub last_name: String,
    #[sea_orm(column_name = "FirstMidName")]
    pub first_mid_name: String,
    #[sea_orm(column_name = "HireDate")]
    pub hire_date: Option<DateTimeUtc>,
    #[sea_orm(column_name = "EnrollmentDate")]
    pub enrollment_date: Option<DateTimeUtc>,
    #[sea_orm(column_name = "Discriminator")]
    pub discriminator: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
    #[sea_orm(has_one = "super::office_assignment::Entity")]
    OfficeAssignment,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::office_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficeAssignment.def()
    }
}

// Many-to-many to Course through the CourseInstructor join table
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_instructor::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_instructor::Relation::Person.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

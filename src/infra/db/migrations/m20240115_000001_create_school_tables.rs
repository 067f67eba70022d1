//! Migration: Create the school record tables.
//!
//! Table names are singular and column names match the published
//! schema. Person holds both students and instructors, discriminated
//! by the Discriminator column.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .col(
                        ColumnDef::new(Person::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Person::LastName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Person::FirstMidName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Person::HireDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Person::EnrollmentDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Person::Discriminator)
                            .string_len(32)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Filtering by discriminator happens on every student/instructor query
        manager
            .create_index(
                Index::create()
                    .name("idx_person_discriminator")
                    .table(Person::Table)
                    .col(Person::Discriminator)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .col(
                        ColumnDef::new(Department::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Department::Name)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Department::Budget).double().not_null())
                    .col(
                        ColumnDef::new(Department::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Department::InstructorId).integer().null())
                    .col(
                        ColumnDef::new(Department::RowVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_administrator")
                            .from(Department::Table, Department::InstructorId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    // Course numbers are registrar-assigned, not generated
                    .col(
                        ColumnDef::new(Course::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Course::Title).string_len(50).not_null())
                    .col(ColumnDef::new(Course::Credits).integer().not_null())
                    .col(ColumnDef::new(Course::DepartmentId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_department")
                            .from(Course::Table, Course::DepartmentId)
                            .to(Department::Table, Department::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Explicit many-to-many join table with a composite key
        manager
            .create_table(
                Table::create()
                    .table(CourseInstructor::Table)
                    .col(
                        ColumnDef::new(CourseInstructor::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseInstructor::InstructorId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseInstructor::CourseId)
                            .col(CourseInstructor::InstructorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courseinstructor_course")
                            .from(CourseInstructor::Table, CourseInstructor::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courseinstructor_person")
                            .from(CourseInstructor::Table, CourseInstructor::InstructorId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .col(
                        ColumnDef::new(Enrollment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollment::CourseId).integer().not_null())
                    .col(ColumnDef::new(Enrollment::StudentId).integer().not_null())
                    .col(ColumnDef::new(Enrollment::Grade).string_len(1).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_course")
                            .from(Enrollment::Table, Enrollment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_student")
                            .from(Enrollment::Table, Enrollment::StudentId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_student")
                    .table(Enrollment::Table)
                    .col(Enrollment::StudentId)
                    .to_owned(),
            )
            .await?;

        // The service checks for an existing enrollment before inserting;
        // the unique index backstops that check under concurrent requests.
        manager
            .create_index(
                Index::create()
                    .name("uq_enrollment_course_student")
                    .table(Enrollment::Table)
                    .col(Enrollment::CourseId)
                    .col(Enrollment::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OfficeAssignment::Table)
                    .col(
                        ColumnDef::new(OfficeAssignment::InstructorId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OfficeAssignment::Location)
                            .string_len(50)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_officeassignment_person")
                            .from(OfficeAssignment::Table, OfficeAssignment::InstructorId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse dependency order
        manager
            .drop_table(Table::drop().table(OfficeAssignment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseInstructor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Person {
    #[iden = "Person"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "LastName"]
    LastName,
    #[iden = "FirstMidName"]
    FirstMidName,
    #[iden = "HireDate"]
    HireDate,
    #[iden = "EnrollmentDate"]
    EnrollmentDate,
    #[iden = "Discriminator"]
    Discriminator,
}

#[derive(Iden)]
enum Department {
    #[iden = "Department"]
    Table,
    #[iden = "DepartmentID"]
    Id,
    #[iden = "Name"]
    Name,
    #[iden = "Budget"]
    Budget,
    #[iden = "StartDate"]
    StartDate,
    #[iden = "InstructorID"]
    InstructorId,
    #[iden = "RowVersion"]
    RowVersion,
}

#[derive(Iden)]
enum Course {
    #[iden = "Course"]
    Table,
    #[iden = "CourseID"]
    Id,
    #[iden = "Title"]
    Title,
    #[iden = "Credits"]
    Credits,
    #[iden = "DepartmentID"]
    DepartmentId,
}

#[derive(Iden)]
enum CourseInstructor {
    #[iden = "CourseInstructor"]
    Table,
    #[iden = "CourseID"]
    CourseId,
    #[iden = "InstructorID"]
    InstructorId,
}

#[derive(Iden)]
enum Enrollment {
    #[iden = "Enrollment"]
    Table,
    #[iden = "EnrollmentID"]
    Id,
    #[iden = "CourseID"]
    CourseId,
    #[iden = "StudentID"]
    StudentId,
    #[iden = "Grade"]
    Grade,
}

#[derive(Iden)]
enum OfficeAssignment {
    #[iden = "OfficeAssignment"]
    Table,
    #[iden = "InstructorID"]
    InstructorId,
    #[iden = "Location"]
    Location,
}

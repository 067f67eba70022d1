//! Department service unit tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockall::predicate::eq;
use sea_orm::DbErr;

use registrar_api::domain::{Department, Instructor};
use registrar_api::errors::AppError;
use registrar_api::infra::repositories::{
    MockCourseRepository, MockDepartmentRepository, MockEnrollmentRepository,
    MockInstructorRepository, MockStudentRepository,
};
use registrar_api::infra::{
    CourseRepository, DepartmentRepository, EnrollmentRepository, InstructorRepository,
    StudentRepository, UnitOfWork,
};
use registrar_api::services::{DepartmentManager, DepartmentService};

fn start_date() -> DateTime<Utc> {
    "2007-09-01T00:00:00Z".parse().unwrap()
}

fn test_department(id: i32, row_version: i32) -> Department {
    Department {
        id,
        name: "Engineering".to_string(),
        budget: 350000.0,
        start_date: start_date(),
        instructor_id: Some(9),
        row_version,
    }
}

fn test_instructor(id: i32) -> Instructor {
    Instructor {
        id,
        last_name: "Abercrombie".to_string(),
        first_mid_name: "Kim".to_string(),
        hire_date: chrono::Utc::now(),
    }
}

/// Test Unit of Work wrapping mock repositories
struct TestUnitOfWork {
    students: Arc<MockStudentRepository>,
    instructors: Arc<MockInstructorRepository>,
    courses: Arc<MockCourseRepository>,
    departments: Arc<MockDepartmentRepository>,
    enrollments: Arc<MockEnrollmentRepository>,
}

impl TestUnitOfWork {
    fn new(departments: MockDepartmentRepository, instructors: MockInstructorRepository) -> Self {
        Self {
            students: Arc::new(MockStudentRepository::new()),
            instructors: Arc::new(instructors),
            courses: Arc::new(MockCourseRepository::new()),
            departments: Arc::new(departments),
            enrollments: Arc::new(MockEnrollmentRepository::new()),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn students(&self) -> Arc<dyn StudentRepository> {
        self.students.clone()
    }

    fn instructors(&self) -> Arc<dyn InstructorRepository> {
        self.instructors.clone()
    }

    fn courses(&self) -> Arc<dyn CourseRepository> {
        self.courses.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentRepository> {
        self.departments.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentRepository> {
        self.enrollments.clone()
    }
}

#[tokio::test]
async fn test_update_forwards_row_version_verbatim() {
    let mut departments = MockDepartmentRepository::new();
    departments
        .expect_find_by_id()
        .with(eq(4))
        .returning(|id| Ok(Some(test_department(id, 3))));
    departments
        .expect_update()
        .with(
            eq(4),
            eq("Engineering".to_string()),
            eq(350000.0),
            eq(start_date()),
            eq(Some(9)),
            eq(3),
        )
        .returning(|id, _, _, _, _, row_version| Ok(test_department(id, row_version + 1)));

    let mut instructors = MockInstructorRepository::new();
    instructors
        .expect_find_by_id()
        .with(eq(9))
        .returning(|id| Ok(Some(test_instructor(id))));

    let uow = Arc::new(TestUnitOfWork::new(departments, instructors));
    let service = DepartmentManager::new(uow);

    let department = service
        .update_department(4, "Engineering".to_string(), 350000.0, start_date(), Some(9), 3)
        .await
        .unwrap();
    assert_eq!(department.row_version, 4);
}

#[tokio::test]
async fn test_delete_forwards_row_version_verbatim() {
    let mut departments = MockDepartmentRepository::new();
    departments
        .expect_find_by_id()
        .with(eq(4))
        .returning(|id| Ok(Some(test_department(id, 3))));
    departments
        .expect_delete()
        .with(eq(4), eq(3))
        .returning(|_, _| Ok(()));

    let uow = Arc::new(TestUnitOfWork::new(
        departments,
        MockInstructorRepository::new(),
    ));
    let service = DepartmentManager::new(uow);

    service.delete_department(4, 3).await.unwrap();
}

#[tokio::test]
async fn test_update_stale_row_version_propagates_database_error() {
    let mut departments = MockDepartmentRepository::new();
    departments
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_department(id, 4))));
    departments.expect_update().returning(|_, _, _, _, _, _| {
        Err(AppError::Database(DbErr::Custom(
            "RowVersion mismatch".to_string(),
        )))
    });

    let uow = Arc::new(TestUnitOfWork::new(
        departments,
        MockInstructorRepository::new(),
    ));
    let service = DepartmentManager::new(uow);

    // The caller's token is behind the stored one; the conflict
    // surfaces untranslated.
    let result = service
        .update_department(4, "Engineering".to_string(), 350000.0, start_date(), None, 3)
        .await;
    assert!(matches!(result, Err(AppError::Database(_))));
}

#[tokio::test]
async fn test_delete_stale_row_version_propagates_database_error() {
    let mut departments = MockDepartmentRepository::new();
    departments
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_department(id, 4))));
    departments.expect_delete().returning(|_, _| {
        Err(AppError::Database(DbErr::Custom(
            "RowVersion mismatch".to_string(),
        )))
    });

    let uow = Arc::new(TestUnitOfWork::new(
        departments,
        MockInstructorRepository::new(),
    ));
    let service = DepartmentManager::new(uow);

    let result = service.delete_department(4, 3).await;
    assert!(matches!(result, Err(AppError::Database(_))));
}

#[tokio::test]
async fn test_create_negative_budget_never_reaches_repository() {
    let mut departments = MockDepartmentRepository::new();
    departments.expect_create().never();

    let mut instructors = MockInstructorRepository::new();
    instructors.expect_find_by_id().never();

    let uow = Arc::new(TestUnitOfWork::new(departments, instructors));
    let service = DepartmentManager::new(uow);

    let result = service
        .create_department("Engineering".to_string(), -1.0, start_date(), None)
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_update_negative_budget_never_reaches_repository() {
    let mut departments = MockDepartmentRepository::new();
    departments.expect_find_by_id().never();
    departments.expect_update().never();

    let uow = Arc::new(TestUnitOfWork::new(
        departments,
        MockInstructorRepository::new(),
    ));
    let service = DepartmentManager::new(uow);

    let result = service
        .update_department(4, "Engineering".to_string(), -1.0, start_date(), None, 3)
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

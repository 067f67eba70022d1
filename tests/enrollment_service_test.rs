//! Enrollment service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;

use registrar_api::domain::{Course, Enrollment, Grade, Student};
use registrar_api::errors::AppError;
use registrar_api::infra::repositories::{
    MockCourseRepository, MockDepartmentRepository, MockEnrollmentRepository,
    MockInstructorRepository, MockStudentRepository,
};
use registrar_api::infra::{
    CourseRepository, DepartmentRepository, EnrollmentRepository, InstructorRepository,
    StudentRepository, UnitOfWork,
};
use registrar_api::services::{EnrollmentManager, EnrollmentService};

fn test_course(id: i32) -> Course {
    Course {
        id,
        title: "Chemistry".to_string(),
        credits: 3,
        department_id: 1,
    }
}

fn test_student(id: i32) -> Student {
    Student {
        id,
        last_name: "Alexander".to_string(),
        first_mid_name: "Carson".to_string(),
        enrollment_date: chrono::Utc::now(),
    }
}

fn test_enrollment(id: i32, course_id: i32, student_id: i32) -> Enrollment {
    Enrollment {
        id,
        course_id,
        student_id,
        grade: None,
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
    fn new(
        students: MockStudentRepository,
        courses: MockCourseRepository,
        enrollments: MockEnrollmentRepository,
    ) -> Self {
        Self {
            students: Arc::new(students),
            instructors: Arc::new(MockInstructorRepository::new()),
            courses: Arc::new(courses),
            departments: Arc::new(MockDepartmentRepository::new()),
            enrollments: Arc::new(enrollments),
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
async fn test_enroll_success() {
    let mut courses = MockCourseRepository::new();
    courses
        .expect_find_by_id()
        .with(eq(1050))
        .returning(|id| Ok(Some(test_course(id))));

    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .with(eq(1))
        .returning(|id| Ok(Some(test_student(id))));

    let mut enrollments = MockEnrollmentRepository::new();
    enrollments
        .expect_find_by_course_and_student()
        .with(eq(1050), eq(1))
        .returning(|_, _| Ok(None));
    enrollments
        .expect_create()
        .with(eq(1050), eq(1))
        .returning(|course_id, student_id| Ok(test_enrollment(7, course_id, student_id)));

    let uow = Arc::new(TestUnitOfWork::new(students, courses, enrollments));
    let service = EnrollmentManager::new(uow);

    let enrollment = service.enroll(1050, 1).await.unwrap();
    assert_eq!(enrollment.course_id, 1050);
    assert_eq!(enrollment.student_id, 1);
    assert!(enrollment.grade.is_none());
}

#[tokio::test]
async fn test_enroll_duplicate_is_conflict() {
    let mut courses = MockCourseRepository::new();
    courses
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_course(id))));

    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .returning(|id| Ok(Some(test_student(id))));

    let mut enrollments = MockEnrollmentRepository::new();
    enrollments
        .expect_find_by_course_and_student()
        .returning(|course_id, student_id| Ok(Some(test_enrollment(7, course_id, student_id))));
    enrollments.expect_create().never();

    let uow = Arc::new(TestUnitOfWork::new(students, courses, enrollments));
    let service = EnrollmentManager::new(uow);

    let result = service.enroll(1050, 1).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_enroll_missing_course_is_not_found() {
    let mut courses = MockCourseRepository::new();
    courses.expect_find_by_id().returning(|_| Ok(None));

    let mut students = MockStudentRepository::new();
    students.expect_find_by_id().never();

    let mut enrollments = MockEnrollmentRepository::new();
    enrollments.expect_create().never();

    let uow = Arc::new(TestUnitOfWork::new(students, courses, enrollments));
    let service = EnrollmentManager::new(uow);

    let result = service.enroll(9999, 1).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_set_grade_passes_through() {
    let mut enrollments = MockEnrollmentRepository::new();
    enrollments
        .expect_set_grade()
        .with(eq(7), eq(Some(Grade::A)))
        .returning(|id, grade| {
            let mut enrollment = test_enrollment(id, 1050, 1);
            enrollment.grade = grade;
            Ok(enrollment)
        });

    let uow = Arc::new(TestUnitOfWork::new(
        MockStudentRepository::new(),
        MockCourseRepository::new(),
        enrollments,
    ));
    let service = EnrollmentManager::new(uow);

    let enrollment = service.set_grade(7, Some(Grade::A)).await.unwrap();
    assert_eq!(enrollment.grade, Some(Grade::A));
}

#[tokio::test]
async fn test_withdraw_missing_enrollment_is_not_found() {
    let mut enrollments = MockEnrollmentRepository::new();
    enrollments
        .expect_delete()
        .with(eq(7))
        .returning(|_| Err(AppError::NotFound));

    let uow = Arc::new(TestUnitOfWork::new(
        MockStudentRepository::new(),
        MockCourseRepository::new(),
        enrollments,
    ));
    let service = EnrollmentManager::new(uow);

    let result = service.withdraw(7).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_course_enrollments_requires_course() {
    let mut courses = MockCourseRepository::new();
    courses.expect_find_by_id().returning(|_| Ok(None));

    let mut enrollments = MockEnrollmentRepository::new();
    enrollments.expect_list_for_course().never();

    let uow = Arc::new(TestUnitOfWork::new(
        MockStudentRepository::new(),
        courses,
        enrollments,
    ));
    let service = EnrollmentManager::new(uow);

    let result = service.course_enrollments(9999).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

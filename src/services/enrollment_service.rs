//! Enrollment service - enrollment and grading use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Enrollment, Grade};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Enrollment service trait for dependency injection.
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Get enrollment by ID
    async fn get_enrollment(&self, id: i32) -> AppResult<Enrollment>;

    /// Enroll a student in a course with no grade yet
    async fn enroll(&self, course_id: i32, student_id: i32) -> AppResult<Enrollment>;

    /// Post a grade, or clear it by passing None
    async fn set_grade(&self, id: i32, grade: Option<Grade>) -> AppResult<Enrollment>;

    /// Withdraw an enrollment
    async fn withdraw(&self, id: i32) -> AppResult<()>;

    /// Enrollments for a course
    async fn course_enrollments(&self, course_id: i32) -> AppResult<Vec<Enrollment>>;
}

/// Concrete implementation of EnrollmentService using Unit of Work.
pub struct EnrollmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EnrollmentManager<U> {
    /// Create new enrollment service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EnrollmentService for EnrollmentManager<U> {
    async fn get_enrollment(&self, id: i32) -> AppResult<Enrollment> {
        self.uow
            .enrollments()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn enroll(&self, course_id: i32, student_id: i32) -> AppResult<Enrollment> {
        self.uow
            .courses()
            .find_by_id(course_id)
            .await?
            .ok_or(AppError::NotFound)?;
        self.uow
            .students()
            .find_by_id(student_id)
            .await?
            .ok_or(AppError::NotFound)?;

        // One enrollment per (course, student) pair
        if self
            .uow
            .enrollments()
            .find_by_course_and_student(course_id, student_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Enrollment"));
        }

        self.uow.enrollments().create(course_id, student_id).await
    }

    async fn set_grade(&self, id: i32, grade: Option<Grade>) -> AppResult<Enrollment> {
        self.uow.enrollments().set_grade(id, grade).await
    }

    async fn withdraw(&self, id: i32) -> AppResult<()> {
        self.uow.enrollments().delete(id).await
    }

    async fn course_enrollments(&self, course_id: i32) -> AppResult<Vec<Enrollment>> {
        self.uow
            .courses()
            .find_by_id(course_id)
            .await?
            .ok_or(AppError::NotFound)?;

        self.uow.enrollments().list_for_course(course_id).await
    }
}

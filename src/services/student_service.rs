//! Student service - student record use cases.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::{Enrollment, Student};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Student service trait for dependency injection.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Get student by ID
    async fn get_student(&self, id: i32) -> AppResult<Student>;

    /// List students with total count
    async fn list_students(&self, params: PaginationParams) -> AppResult<(Vec<Student>, u64)>;

    /// Create a new student
    async fn create_student(
        &self,
        last_name: String,
        first_mid_name: String,
        enrollment_date: DateTime<Utc>,
    ) -> AppResult<Student>;

    /// Update student details
    async fn update_student(
        &self,
        id: i32,
        last_name: Option<String>,
        first_mid_name: Option<String>,
        enrollment_date: Option<DateTime<Utc>>,
    ) -> AppResult<Student>;

    /// Delete a student and, through the schema, their enrollments
    async fn delete_student(&self, id: i32) -> AppResult<()>;

    /// Enrollments held by a student
    async fn student_enrollments(&self, id: i32) -> AppResult<Vec<Enrollment>>;
}

/// Concrete implementation of StudentService using Unit of Work.
pub struct StudentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StudentManager<U> {
    /// Create new student service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> StudentService for StudentManager<U> {
    async fn get_student(&self, id: i32) -> AppResult<Student> {
        self.uow
            .students()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_students(&self, params: PaginationParams) -> AppResult<(Vec<Student>, u64)> {
        self.uow.students().list(&params).await
    }

    async fn create_student(
        &self,
        last_name: String,
        first_mid_name: String,
        enrollment_date: DateTime<Utc>,
    ) -> AppResult<Student> {
        self.uow
            .students()
            .create(last_name, first_mid_name, enrollment_date)
            .await
    }

    async fn update_student(
        &self,
        id: i32,
        last_name: Option<String>,
        first_mid_name: Option<String>,
        enrollment_date: Option<DateTime<Utc>>,
    ) -> AppResult<Student> {
        self.uow
            .students()
            .update(id, last_name, first_mid_name, enrollment_date)
            .await
    }

    async fn delete_student(&self, id: i32) -> AppResult<()> {
        self.uow.students().delete(id).await
    }

    async fn student_enrollments(&self, id: i32) -> AppResult<Vec<Enrollment>> {
        self.get_student(id).await?;
        self.uow.enrollments().list_for_student(id).await
    }
}

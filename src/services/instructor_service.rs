//! Instructor service - instructor record and office assignment use
//! cases.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::{Course, Instructor, OfficeAssignment};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Instructor service trait for dependency injection.
#[async_trait]
pub trait InstructorService: Send + Sync {
    /// Get instructor by ID
    async fn get_instructor(&self, id: i32) -> AppResult<Instructor>;

    /// List instructors with total count
    async fn list_instructors(&self, params: PaginationParams)
        -> AppResult<(Vec<Instructor>, u64)>;

    /// Create a new instructor
    async fn create_instructor(
        &self,
        last_name: String,
        first_mid_name: String,
        hire_date: DateTime<Utc>,
    ) -> AppResult<Instructor>;

    /// Update instructor details
    async fn update_instructor(
        &self,
        id: i32,
        last_name: Option<String>,
        first_mid_name: Option<String>,
        hire_date: Option<DateTime<Utc>>,
    ) -> AppResult<Instructor>;

    /// Delete an instructor, detaching any department they administer
    async fn delete_instructor(&self, id: i32) -> AppResult<()>;

    /// Office assignment for an instructor, if one exists
    async fn get_office(&self, id: i32) -> AppResult<Option<OfficeAssignment>>;

    /// Set or replace an instructor's office
    async fn set_office(&self, id: i32, location: String) -> AppResult<OfficeAssignment>;

    /// Remove an instructor's office assignment
    async fn clear_office(&self, id: i32) -> AppResult<()>;

    /// Courses the instructor teaches
    async fn instructor_courses(&self, id: i32) -> AppResult<Vec<Course>>;
}

/// Concrete implementation of InstructorService using Unit of Work.
pub struct InstructorManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> InstructorManager<U> {
    /// Create new instructor service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> InstructorService for InstructorManager<U> {
    async fn get_instructor(&self, id: i32) -> AppResult<Instructor> {
        self.uow
            .instructors()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_instructors(
        &self,
        params: PaginationParams,
    ) -> AppResult<(Vec<Instructor>, u64)> {
        self.uow.instructors().list(&params).await
    }

    async fn create_instructor(
        &self,
        last_name: String,
        first_mid_name: String,
        hire_date: DateTime<Utc>,
    ) -> AppResult<Instructor> {
        self.uow
            .instructors()
            .create(last_name, first_mid_name, hire_date)
            .await
    }

    async fn update_instructor(
        &self,
        id: i32,
        last_name: Option<String>,
        first_mid_name: Option<String>,
        hire_date: Option<DateTime<Utc>>,
    ) -> AppResult<Instructor> {
        self.uow
            .instructors()
            .update(id, last_name, first_mid_name, hire_date)
            .await
    }

    async fn delete_instructor(&self, id: i32) -> AppResult<()> {
        self.uow.instructors().delete(id).await
    }

    async fn get_office(&self, id: i32) -> AppResult<Option<OfficeAssignment>> {
        self.get_instructor(id).await?;
        self.uow.instructors().find_office(id).await
    }

    async fn set_office(&self, id: i32, location: String) -> AppResult<OfficeAssignment> {
        if location.trim().is_empty() {
            return Err(AppError::validation("Office location must not be empty"));
        }
        self.uow.instructors().upsert_office(id, location).await
    }

    async fn clear_office(&self, id: i32) -> AppResult<()> {
        self.get_instructor(id).await?;
        self.uow.instructors().clear_office(id).await
    }

    async fn instructor_courses(&self, id: i32) -> AppResult<Vec<Course>> {
        self.uow.instructors().courses(id).await
    }
}

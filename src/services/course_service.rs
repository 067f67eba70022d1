//! Course service - course catalog and teaching assignment use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MAX_COURSE_CREDITS, MIN_COURSE_CREDITS};
use crate::domain::{Course, Instructor};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Course service trait for dependency injection.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Get course by its registrar-assigned number
    async fn get_course(&self, id: i32) -> AppResult<Course>;

    /// List courses with total count
    async fn list_courses(&self, params: PaginationParams) -> AppResult<(Vec<Course>, u64)>;

    /// Create a course; the number comes from the registrar, not the
    /// database
    async fn create_course(
        &self,
        id: i32,
        title: String,
        credits: i32,
        department_id: i32,
    ) -> AppResult<Course>;

    /// Update course details
    async fn update_course(
        &self,
        id: i32,
        title: Option<String>,
        credits: Option<i32>,
        department_id: Option<i32>,
    ) -> AppResult<Course>;

    /// Delete a course and, through the schema, its enrollments and
    /// teaching links
    async fn delete_course(&self, id: i32) -> AppResult<()>;

    /// Instructors assigned to a course
    async fn course_instructors(&self, id: i32) -> AppResult<Vec<Instructor>>;

    /// Assign an instructor to a course
    async fn assign_instructor(&self, id: i32, instructor_id: i32) -> AppResult<()>;

    /// Remove an instructor from a course
    async fn unassign_instructor(&self, id: i32, instructor_id: i32) -> AppResult<()>;

    /// Replace the full set of instructors on a course
    async fn set_instructors(&self, id: i32, instructor_ids: Vec<i32>) -> AppResult<()>;
}

fn check_credits(credits: i32) -> AppResult<()> {
    if !(MIN_COURSE_CREDITS..=MAX_COURSE_CREDITS).contains(&credits) {
        return Err(AppError::validation(format!(
            "Credits must be between {} and {}",
            MIN_COURSE_CREDITS, MAX_COURSE_CREDITS
        )));
    }
    Ok(())
}

/// Concrete implementation of CourseService using Unit of Work.
pub struct CourseManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CourseManager<U> {
    /// Create new course service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn require_department(&self, department_id: i32) -> AppResult<()> {
        self.uow
            .departments()
            .find_by_id(department_id)
            .await?
            .ok_or(AppError::NotFound)?;
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> CourseService for CourseManager<U> {
    async fn get_course(&self, id: i32) -> AppResult<Course> {
        self.uow
            .courses()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_courses(&self, params: PaginationParams) -> AppResult<(Vec<Course>, u64)> {
        self.uow.courses().list(&params).await
    }

    async fn create_course(
        &self,
        id: i32,
        title: String,
        credits: i32,
        department_id: i32,
    ) -> AppResult<Course> {
        check_credits(credits)?;
        self.require_department(department_id).await?;

        self.uow
            .courses()
            .create(id, title, credits, department_id)
            .await
    }

    async fn update_course(
        &self,
        id: i32,
        title: Option<String>,
        credits: Option<i32>,
        department_id: Option<i32>,
    ) -> AppResult<Course> {
        if let Some(credits) = credits {
            check_credits(credits)?;
        }
        if let Some(department_id) = department_id {
            self.require_department(department_id).await?;
        }

        self.uow
            .courses()
            .update(id, title, credits, department_id)
            .await
    }

    async fn delete_course(&self, id: i32) -> AppResult<()> {
        self.uow.courses().delete(id).await
    }

    async fn course_instructors(&self, id: i32) -> AppResult<Vec<Instructor>> {
        self.uow.courses().instructors(id).await
    }

    async fn assign_instructor(&self, id: i32, instructor_id: i32) -> AppResult<()> {
        self.uow.courses().assign_instructor(id, instructor_id).await
    }

    async fn unassign_instructor(&self, id: i32, instructor_id: i32) -> AppResult<()> {
        self.uow
            .courses()
            .unassign_instructor(id, instructor_id)
            .await
    }

    async fn set_instructors(&self, id: i32, instructor_ids: Vec<i32>) -> AppResult<()> {
        self.uow.courses().set_instructors(id, instructor_ids).await
    }
}

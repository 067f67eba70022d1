//! Department service - department use cases.
//!
//! Writes carry the caller's RowVersion token through to the
//! repository so concurrent edits surface as conflicts instead of
//! silently overwriting each other.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::Department;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::PaginationParams;

/// Department service trait for dependency injection.
#[async_trait]
pub trait DepartmentService: Send + Sync {
    /// Get department by ID
    async fn get_department(&self, id: i32) -> AppResult<Department>;

    /// List departments with total count
    async fn list_departments(&self, params: PaginationParams)
        -> AppResult<(Vec<Department>, u64)>;

    /// Create a new department
    async fn create_department(
        &self,
        name: String,
        budget: f64,
        start_date: DateTime<Utc>,
        instructor_id: Option<i32>,
    ) -> AppResult<Department>;

    /// Update a department; fails when `row_version` is stale
    async fn update_department(
        &self,
        id: i32,
        name: String,
        budget: f64,
        start_date: DateTime<Utc>,
        instructor_id: Option<i32>,
        row_version: i32,
    ) -> AppResult<Department>;

    /// Delete a department; fails when `row_version` is stale
    async fn delete_department(&self, id: i32, row_version: i32) -> AppResult<()>;
}

/// Concrete implementation of DepartmentService using Unit of Work.
pub struct DepartmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DepartmentManager<U> {
    /// Create new department service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn require_administrator(&self, instructor_id: Option<i32>) -> AppResult<()> {
        if let Some(instructor_id) = instructor_id {
            self.uow
                .instructors()
                .find_by_id(instructor_id)
                .await?
                .ok_or(AppError::NotFound)?;
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> DepartmentService for DepartmentManager<U> {
    async fn get_department(&self, id: i32) -> AppResult<Department> {
        self.uow
            .departments()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_departments(
        &self,
        params: PaginationParams,
    ) -> AppResult<(Vec<Department>, u64)> {
        self.uow.departments().list(&params).await
    }

    async fn create_department(
        &self,
        name: String,
        budget: f64,
        start_date: DateTime<Utc>,
        instructor_id: Option<i32>,
    ) -> AppResult<Department> {
        if budget < 0.0 {
            return Err(AppError::validation("Budget must not be negative"));
        }
        self.require_administrator(instructor_id).await?;

        self.uow
            .departments()
            .create(name, budget, start_date, instructor_id)
            .await
    }

    async fn update_department(
        &self,
        id: i32,
        name: String,
        budget: f64,
        start_date: DateTime<Utc>,
        instructor_id: Option<i32>,
        row_version: i32,
    ) -> AppResult<Department> {
        if budget < 0.0 {
            return Err(AppError::validation("Budget must not be negative"));
        }
        self.get_department(id).await?;
        self.require_administrator(instructor_id).await?;

        self.uow
            .departments()
            .update(id, name, budget, start_date, instructor_id, row_version)
            .await
    }

    async fn delete_department(&self, id: i32, row_version: i32) -> AppResult<()> {
        self.get_department(id).await?;
        self.uow.departments().delete(id, row_version).await
    }
}

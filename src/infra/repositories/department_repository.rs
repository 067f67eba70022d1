//! Department repository.
//!
//! Reads use the entity; every write goes through the
//! Department_Insert/Update/Delete stored procedures so the RowVersion
//! concurrency check lives in one place, the database. A stale
//! RowVersion makes the procedure raise and the error propagates
//! untranslated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use super::base::ReadRepository;
use super::entities::department;
use crate::domain::Department;
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Department repository contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find a department by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Department>>;

    /// List departments with total count
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Department>, u64)>;

    /// Create a department through Department_Insert
    async fn create(
        &self,
        name: String,
        budget: f64,
        start_date: DateTime<Utc>,
        instructor_id: Option<i32>,
    ) -> AppResult<Department>;

    /// Update a department through Department_Update; `row_version`
    /// must match the stored token or the call fails
    async fn update(
        &self,
        id: i32,
        name: String,
        budget: f64,
        start_date: DateTime<Utc>,
        instructor_id: Option<i32>,
        row_version: i32,
    ) -> AppResult<Department>;

    /// Delete a department through Department_Delete; `row_version`
    /// must match the stored token or the call fails
    async fn delete(&self, id: i32, row_version: i32) -> AppResult<()>;
}

fn to_department(model: department::Model) -> Department {
    Department {
        id: model.id,
        name: model.name,
        budget: model.budget,
        start_date: model.start_date,
        instructor_id: model.instructor_id,
        row_version: model.row_version,
    }
}

/// SeaORM-backed department repository
pub struct DepartmentStore {
    db: DatabaseConnection,
}

impl DepartmentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, id: i32) -> AppResult<Department> {
        ReadRepository::find_by_id(self, id)
            .await?
            .map(to_department)
            .ok_or(AppError::NotFound)
    }
}

impl ReadRepository<department::Entity, department::Model> for DepartmentStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl DepartmentRepository for DepartmentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Department>> {
        let result = ReadRepository::find_by_id(self, id).await?;
        Ok(result.map(to_department))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Department>, u64)> {
        let (data, total) = ReadRepository::find_paginated(self, params).await?;
        Ok((data.into_iter().map(to_department).collect(), total))
    }

    async fn create(
        &self,
        name: String,
        budget: f64,
        start_date: DateTime<Utc>,
        instructor_id: Option<i32>,
    ) -> AppResult<Department> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"SELECT "Department_Insert"($1, $2, $3, $4) AS "DepartmentID""#,
            [
                name.into(),
                budget.into(),
                start_date.into(),
                instructor_id.into(),
            ],
        );

        let row = self
            .db
            .query_one(stmt)
            .await?
            .ok_or_else(|| AppError::internal("Department_Insert returned no row"))?;
        let id: i32 = row.try_get("", "DepartmentID")?;

        self.fetch(id).await
    }

    async fn update(
        &self,
        id: i32,
        name: String,
        budget: f64,
        start_date: DateTime<Utc>,
        instructor_id: Option<i32>,
        row_version: i32,
    ) -> AppResult<Department> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"SELECT "Department_Update"($1, $2, $3, $4, $5, $6) AS "RowVersion""#,
            [
                id.into(),
                name.into(),
                budget.into(),
                start_date.into(),
                instructor_id.into(),
                row_version.into(),
            ],
        );

        // A stale RowVersion raises inside the procedure and lands
        // here as a DbErr.
        self.db.query_one(stmt).await?;

        self.fetch(id).await
    }

    async fn delete(&self, id: i32, row_version: i32) -> AppResult<()> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            r#"SELECT "Department_Delete"($1, $2)"#,
            [id.into(), row_version.into()],
        );

        self.db.execute(stmt).await?;
        Ok(())
    }
}

//! Departments.
//!
//! Department rows are written through stored procedures rather than
//! ad hoc statements; `row_version` is the optimistic-concurrency
//! token those procedures check and bump.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Department domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub budget: f64,
    pub start_date: DateTime<Utc>,
    /// Administrator, if one is appointed
    pub instructor_id: Option<i32>,
    /// Concurrency token maintained by the stored procedures
    pub row_version: i32,
}

/// Department response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepartmentResponse {
    /// Department identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Department name
    #[schema(example = "Engineering")]
    pub name: String,
    /// Annual budget
    #[schema(example = 350000.0)]
    pub budget: f64,
    /// Date the department was founded
    pub start_date: DateTime<Utc>,
    /// Administrator, if one is appointed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i32>,
    /// Concurrency token; send it back on update/delete
    #[schema(example = 1)]
    pub row_version: i32,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            budget: department.budget,
            start_date: department.start_date,
            instructor_id: department.instructor_id,
            row_version: department.row_version,
        }
    }
}

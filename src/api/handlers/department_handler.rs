//! Department handlers.
//!
//! Update and delete carry the RowVersion token the client last read;
//! a stale token fails instead of overwriting someone else's change.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::DepartmentResponse;
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Department creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDepartmentRequest {
    /// Department name
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    #[schema(example = "Engineering")]
    pub name: String,
    /// Annual budget
    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    #[schema(example = 350000.0)]
    pub budget: f64,
    /// Date the department was founded
    pub start_date: DateTime<Utc>,
    /// Administrator, if one is appointed
    #[schema(example = 1)]
    pub instructor_id: Option<i32>,
}

/// Department update request; all fields plus the concurrency token
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDepartmentRequest {
    /// Department name
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    #[schema(example = "Engineering")]
    pub name: String,
    /// Annual budget
    #[validate(range(min = 0.0, message = "Budget must not be negative"))]
    #[schema(example = 350000.0)]
    pub budget: f64,
    /// Date the department was founded
    pub start_date: DateTime<Utc>,
    /// Administrator, if one is appointed
    #[schema(example = 1)]
    pub instructor_id: Option<i32>,
    /// RowVersion from the last read
    #[schema(example = 1)]
    pub row_version: i32,
}

/// Concurrency token for delete requests
#[derive(Debug, Deserialize)]
pub struct RowVersionQuery {
    pub row_version: i32,
}

/// Create department routes
pub fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/:id",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}

/// List departments
#[utoipa::path(
    get,
    path = "/departments",
    tag = "Departments",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-indexed)"),
        ("per_page" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated department list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_departments(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<DepartmentResponse>>> {
    let (departments, total) = state
        .department_service
        .list_departments(params.clone())
        .await?;

    let data = departments
        .into_iter()
        .map(DepartmentResponse::from)
        .collect();
    Ok(Json(Paginated::new(data, params.page, params.limit(), total)))
}

/// Get a department by id
#[utoipa::path(
    get,
    path = "/departments/{id}",
    tag = "Departments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department found", body = DepartmentResponse),
        (status = 404, description = "Department not found")
    )
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DepartmentResponse>> {
    let department = state.department_service.get_department(id).await?;
    Ok(Json(DepartmentResponse::from(department)))
}

/// Create a department
#[utoipa::path(
    post,
    path = "/departments",
    tag = "Departments",
    security(("bearer_auth" = [])),
    request_body = CreateDepartmentRequest,
    responses(
        (status = 201, description = "Department created", body = DepartmentResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_department(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDepartmentRequest>,
) -> AppResult<Created<DepartmentResponse>> {
    let department = state
        .department_service
        .create_department(
            payload.name,
            payload.budget,
            payload.start_date,
            payload.instructor_id,
        )
        .await?;

    Ok(Created(DepartmentResponse::from(department)))
}

/// Update a department
#[utoipa::path(
    put,
    path = "/departments/{id}",
    tag = "Departments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Department ID")),
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Department updated", body = DepartmentResponse),
        (status = 404, description = "Department not found"),
        (status = 500, description = "Concurrency conflict")
    )
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateDepartmentRequest>,
) -> AppResult<Json<DepartmentResponse>> {
    let department = state
        .department_service
        .update_department(
            id,
            payload.name,
            payload.budget,
            payload.start_date,
            payload.instructor_id,
            payload.row_version,
        )
        .await?;

    Ok(Json(DepartmentResponse::from(department)))
}

/// Delete a department
#[utoipa::path(
    delete,
    path = "/departments/{id}",
    tag = "Departments",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Department ID"),
        ("row_version" = i32, Query, description = "RowVersion from the last read")
    ),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 404, description = "Department not found"),
        (status = 500, description = "Concurrency conflict")
    )
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<RowVersionQuery>,
) -> AppResult<NoContent> {
    state
        .department_service
        .delete_department(id, query.row_version)
        .await?;

    Ok(NoContent)
}

//! Student handlers.

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
use crate::domain::{EnrollmentResponse, StudentResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Student creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    /// Family name
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    #[schema(example = "Alexander")]
    pub last_name: String,
    /// First and middle names
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    #[schema(example = "Carson")]
    pub first_mid_name: String,
    /// Date the student first enrolled
    pub enrollment_date: DateTime<Utc>,
}

/// Student update request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentRequest {
    /// Family name
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    #[schema(example = "Alexander")]
    pub last_name: Option<String>,
    /// First and middle names
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    #[schema(example = "Carson")]
    pub first_mid_name: Option<String>,
    /// Date the student first enrolled
    pub enrollment_date: Option<DateTime<Utc>>,
}

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/:id/enrollments", get(student_enrollments))
}

/// List students
#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-indexed)"),
        ("per_page" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated student list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<StudentResponse>>> {
    let (students, total) = state.student_service.list_students(params.clone()).await?;

    let data = students.into_iter().map(StudentResponse::from).collect();
    Ok(Json(Paginated::new(data, params.page, params.limit(), total)))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<StudentResponse>> {
    let student = state.student_service.get_student(id).await?;
    Ok(Json(StudentResponse::from(student)))
}

/// Create a student
#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    security(("bearer_auth" = [])),
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateStudentRequest>,
) -> AppResult<Created<StudentResponse>> {
    let student = state
        .student_service
        .create_student(
            payload.last_name,
            payload.first_mid_name,
            payload.enrollment_date,
        )
        .await?;

    Ok(Created(StudentResponse::from(student)))
}

/// Update a student
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Student ID")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateStudentRequest>,
) -> AppResult<Json<StudentResponse>> {
    let student = state
        .student_service
        .update_student(
            id,
            payload.last_name,
            payload.first_mid_name,
            payload.enrollment_date,
        )
        .await?;

    Ok(Json(StudentResponse::from(student)))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.student_service.delete_student(id).await?;
    Ok(NoContent)
}

/// Enrollments held by a student
#[utoipa::path(
    get,
    path = "/students/{id}/enrollments",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student enrollments", body = [EnrollmentResponse]),
        (status = 404, description = "Student not found")
    )
)]
pub async fn student_enrollments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = state.student_service.student_enrollments(id).await?;
    Ok(Json(
        enrollments
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect(),
    ))
}

//! Enrollment handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{EnrollmentResponse, Grade};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Enrollment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EnrollRequest {
    /// Course number
    #[schema(example = 1050)]
    pub course_id: i32,
    /// Student to enroll
    #[schema(example = 1)]
    pub student_id: i32,
}

/// Grade posting request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetGradeRequest {
    /// Letter grade A-F, or null to clear the grade
    #[schema(example = "A")]
    pub grade: Option<String>,
}

/// Create enrollment routes
pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(enroll))
        .route("/:id", get(get_enrollment).delete(withdraw))
        .route("/:id/grade", put(set_grade))
}

/// Get an enrollment by id
#[utoipa::path(
    get,
    path = "/enrollments/{id}",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Enrollment ID")),
    responses(
        (status = 200, description = "Enrollment found", body = EnrollmentResponse),
        (status = 404, description = "Enrollment not found")
    )
)]
pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EnrollmentResponse>> {
    let enrollment = state.enrollment_service.get_enrollment(id).await?;
    Ok(Json(EnrollmentResponse::from(enrollment)))
}

/// Enroll a student in a course
#[utoipa::path(
    post,
    path = "/enrollments",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    request_body = EnrollRequest,
    responses(
        (status = 201, description = "Student enrolled", body = EnrollmentResponse),
        (status = 404, description = "Course or student not found"),
        (status = 409, description = "Student already enrolled")
    )
)]
pub async fn enroll(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EnrollRequest>,
) -> AppResult<Created<EnrollmentResponse>> {
    let enrollment = state
        .enrollment_service
        .enroll(payload.course_id, payload.student_id)
        .await?;

    Ok(Created(EnrollmentResponse::from(enrollment)))
}

/// Post or clear a grade
#[utoipa::path(
    put,
    path = "/enrollments/{id}/grade",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Enrollment ID")),
    request_body = SetGradeRequest,
    responses(
        (status = 200, description = "Grade recorded", body = EnrollmentResponse),
        (status = 400, description = "Invalid grade"),
        (status = 404, description = "Enrollment not found")
    )
)]
pub async fn set_grade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<SetGradeRequest>,
) -> AppResult<Json<EnrollmentResponse>> {
    let grade = payload.grade.as_deref().map(Grade::parse).transpose()?;

    let enrollment = state.enrollment_service.set_grade(id, grade).await?;
    Ok(Json(EnrollmentResponse::from(enrollment)))
}

/// Withdraw an enrollment
#[utoipa::path(
    delete,
    path = "/enrollments/{id}",
    tag = "Enrollments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Enrollment ID")),
    responses(
        (status = 204, description = "Enrollment withdrawn"),
        (status = 404, description = "Enrollment not found")
    )
)]
pub async fn withdraw(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.enrollment_service.withdraw(id).await?;
    Ok(NoContent)
}

//! Instructor handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, put},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CourseResponse, InstructorResponse, OfficeAssignment};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Instructor creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInstructorRequest {
    /// Family name
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    #[schema(example = "Abercrombie")]
    pub last_name: String,
    /// First and middle names
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    #[schema(example = "Kim")]
    pub first_mid_name: String,
    /// Hire date
    pub hire_date: DateTime<Utc>,
}

/// Instructor update request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInstructorRequest {
    /// Family name
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    #[schema(example = "Abercrombie")]
    pub last_name: Option<String>,
    /// First and middle names
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    #[schema(example = "Kim")]
    pub first_mid_name: Option<String>,
    /// Hire date
    pub hire_date: Option<DateTime<Utc>>,
}

/// Office assignment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetOfficeRequest {
    /// Office location
    #[validate(length(min = 1, max = 50, message = "Location must be 1-50 characters"))]
    #[schema(example = "Smith 17")]
    pub location: String,
}

/// Create instructor routes
pub fn instructor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_instructors).post(create_instructor))
        .route(
            "/:id",
            get(get_instructor)
                .put(update_instructor)
                .delete(delete_instructor),
        )
        .route("/:id/office", put(set_office).delete(clear_office))
        .route("/:id/courses", get(instructor_courses))
}

/// List instructors
#[utoipa::path(
    get,
    path = "/instructors",
    tag = "Instructors",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-indexed)"),
        ("per_page" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated instructor list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_instructors(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<InstructorResponse>>> {
    let (instructors, total) = state
        .instructor_service
        .list_instructors(params.clone())
        .await?;

    let data = instructors
        .into_iter()
        .map(InstructorResponse::from)
        .collect();
    Ok(Json(Paginated::new(data, params.page, params.limit(), total)))
}

/// Get an instructor by id, with office assignment
#[utoipa::path(
    get,
    path = "/instructors/{id}",
    tag = "Instructors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Instructor found", body = InstructorResponse),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn get_instructor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<InstructorResponse>> {
    let instructor = state.instructor_service.get_instructor(id).await?;
    let office = state.instructor_service.get_office(id).await?;

    Ok(Json(InstructorResponse::with_office(
        instructor,
        office.map(|o| o.location),
    )))
}

/// Create an instructor
#[utoipa::path(
    post,
    path = "/instructors",
    tag = "Instructors",
    security(("bearer_auth" = [])),
    request_body = CreateInstructorRequest,
    responses(
        (status = 201, description = "Instructor created", body = InstructorResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_instructor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateInstructorRequest>,
) -> AppResult<Created<InstructorResponse>> {
    let instructor = state
        .instructor_service
        .create_instructor(payload.last_name, payload.first_mid_name, payload.hire_date)
        .await?;

    Ok(Created(InstructorResponse::from(instructor)))
}

/// Update an instructor
#[utoipa::path(
    put,
    path = "/instructors/{id}",
    tag = "Instructors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Instructor ID")),
    request_body = UpdateInstructorRequest,
    responses(
        (status = 200, description = "Instructor updated", body = InstructorResponse),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn update_instructor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateInstructorRequest>,
) -> AppResult<Json<InstructorResponse>> {
    let instructor = state
        .instructor_service
        .update_instructor(id, payload.last_name, payload.first_mid_name, payload.hire_date)
        .await?;

    Ok(Json(InstructorResponse::from(instructor)))
}

/// Delete an instructor
#[utoipa::path(
    delete,
    path = "/instructors/{id}",
    tag = "Instructors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Instructor ID")),
    responses(
        (status = 204, description = "Instructor deleted"),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn delete_instructor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.instructor_service.delete_instructor(id).await?;
    Ok(NoContent)
}

/// Set or replace an instructor's office
#[utoipa::path(
    put,
    path = "/instructors/{id}/office",
    tag = "Instructors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Instructor ID")),
    request_body = SetOfficeRequest,
    responses(
        (status = 200, description = "Office assigned", body = OfficeAssignment),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn set_office(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<SetOfficeRequest>,
) -> AppResult<Json<OfficeAssignment>> {
    let office = state
        .instructor_service
        .set_office(id, payload.location)
        .await?;

    Ok(Json(office))
}

/// Remove an instructor's office assignment
#[utoipa::path(
    delete,
    path = "/instructors/{id}/office",
    tag = "Instructors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Instructor ID")),
    responses(
        (status = 204, description = "Office cleared"),
        (status = 404, description = "Instructor or office not found")
    )
)]
pub async fn clear_office(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.instructor_service.clear_office(id).await?;
    Ok(NoContent)
}

/// Courses the instructor teaches
#[utoipa::path(
    get,
    path = "/instructors/{id}/courses",
    tag = "Instructors",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Courses taught", body = [CourseResponse]),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn instructor_courses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<CourseResponse>>> {
    let courses = state.instructor_service.instructor_courses(id).await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

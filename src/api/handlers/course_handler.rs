//! Course handlers, including teaching assignment management.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CourseResponse, EnrollmentResponse, InstructorResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// Course creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    /// Registrar-assigned course number
    #[schema(example = 1050)]
    pub id: i32,
    /// Course title
    #[validate(length(min = 1, max = 50, message = "Title must be 1-50 characters"))]
    #[schema(example = "Chemistry")]
    pub title: String,
    /// Credit hours (0 to 5)
    #[validate(range(min = 0, max = 5, message = "Credits must be between 0 and 5"))]
    #[schema(example = 3)]
    pub credits: i32,
    /// Owning department
    #[schema(example = 1)]
    pub department_id: i32,
}

/// Course update request; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseRequest {
    /// Course title
    #[validate(length(min = 1, max = 50, message = "Title must be 1-50 characters"))]
    #[schema(example = "Chemistry")]
    pub title: Option<String>,
    /// Credit hours (0 to 5)
    #[validate(range(min = 0, max = 5, message = "Credits must be between 0 and 5"))]
    #[schema(example = 4)]
    pub credits: Option<i32>,
    /// Owning department
    #[schema(example = 1)]
    pub department_id: Option<i32>,
}

/// Teaching assignment replacement request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetInstructorsRequest {
    /// Full set of instructor ids to assign
    #[schema(example = json!([1, 2]))]
    pub instructor_ids: Vec<i32>,
}

/// Create course routes
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route(
            "/:id",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route(
            "/:id/instructors",
            get(course_instructors).put(set_instructors),
        )
        .route(
            "/:id/instructors/:instructor_id",
            post(assign_instructor).delete(unassign_instructor),
        )
        .route("/:id/enrollments", get(course_enrollments))
}

/// List courses
#[utoipa::path(
    get,
    path = "/courses",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u64>, Query, description = "Page number (1-indexed)"),
        ("per_page" = Option<u64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "Paginated course list"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<CourseResponse>>> {
    let (courses, total) = state.course_service.list_courses(params.clone()).await?;

    let data = courses.into_iter().map(CourseResponse::from).collect();
    Ok(Json(Paginated::new(data, params.page, params.limit(), total)))
}

/// Get a course by its number
#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course number")),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CourseResponse>> {
    let course = state.course_service.get_course(id).await?;
    Ok(Json(CourseResponse::from(course)))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/courses",
    tag = "Courses",
    security(("bearer_auth" = [])),
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Course number already in use")
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCourseRequest>,
) -> AppResult<Created<CourseResponse>> {
    let course = state
        .course_service
        .create_course(
            payload.id,
            payload.title,
            payload.credits,
            payload.department_id,
        )
        .await?;

    Ok(Created(CourseResponse::from(course)))
}

/// Update a course
#[utoipa::path(
    put,
    path = "/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course number")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "Course not found")
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCourseRequest>,
) -> AppResult<Json<CourseResponse>> {
    let course = state
        .course_service
        .update_course(id, payload.title, payload.credits, payload.department_id)
        .await?;

    Ok(Json(CourseResponse::from(course)))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course number")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.course_service.delete_course(id).await?;
    Ok(NoContent)
}

/// Instructors assigned to a course
#[utoipa::path(
    get,
    path = "/courses/{id}/instructors",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course number")),
    responses(
        (status = 200, description = "Assigned instructors", body = [InstructorResponse]),
        (status = 404, description = "Course not found")
    )
)]
pub async fn course_instructors(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<InstructorResponse>>> {
    let instructors = state.course_service.course_instructors(id).await?;
    Ok(Json(
        instructors
            .into_iter()
            .map(InstructorResponse::from)
            .collect(),
    ))
}

/// Replace the full set of instructors on a course
#[utoipa::path(
    put,
    path = "/courses/{id}/instructors",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course number")),
    request_body = SetInstructorsRequest,
    responses(
        (status = 204, description = "Assignments replaced"),
        (status = 404, description = "Course or instructor not found")
    )
)]
pub async fn set_instructors(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<SetInstructorsRequest>,
) -> AppResult<NoContent> {
    state
        .course_service
        .set_instructors(id, payload.instructor_ids)
        .await?;

    Ok(NoContent)
}

/// Assign an instructor to a course
#[utoipa::path(
    post,
    path = "/courses/{id}/instructors/{instructor_id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Course number"),
        ("instructor_id" = i32, Path, description = "Instructor ID")
    ),
    responses(
        (status = 201, description = "Instructor assigned"),
        (status = 404, description = "Course or instructor not found"),
        (status = 409, description = "Instructor already assigned")
    )
)]
pub async fn assign_instructor(
    State(state): State<AppState>,
    Path((id, instructor_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    state
        .course_service
        .assign_instructor(id, instructor_id)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Remove an instructor from a course
#[utoipa::path(
    delete,
    path = "/courses/{id}/instructors/{instructor_id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Course number"),
        ("instructor_id" = i32, Path, description = "Instructor ID")
    ),
    responses(
        (status = 204, description = "Instructor unassigned"),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn unassign_instructor(
    State(state): State<AppState>,
    Path((id, instructor_id)): Path<(i32, i32)>,
) -> AppResult<NoContent> {
    state
        .course_service
        .unassign_instructor(id, instructor_id)
        .await?;

    Ok(NoContent)
}

/// Enrollments in a course
#[utoipa::path(
    get,
    path = "/courses/{id}/enrollments",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course number")),
    responses(
        (status = 200, description = "Course enrollments", body = [EnrollmentResponse]),
        (status = 404, description = "Course not found")
    )
)]
pub async fn course_enrollments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<EnrollmentResponse>>> {
    let enrollments = state.enrollment_service.course_enrollments(id).await?;
    Ok(Json(
        enrollments
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect(),
    ))
}

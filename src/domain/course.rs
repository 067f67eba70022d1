//! Courses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Course domain entity.
///
/// Course numbers are assigned by the registrar, not by the database,
/// so `id` is supplied at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub credits: i32,
    pub department_id: i32,
}

/// Course response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseResponse {
    /// Course number
    #[schema(example = 1050)]
    pub id: i32,
    /// Course title
    #[schema(example = "Chemistry")]
    pub title: String,
    /// Credit hours
    #[schema(example = 3)]
    pub credits: i32,
    /// Owning department
    #[schema(example = 1)]
    pub department_id: i32,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            credits: course.credits,
            department_id: course.department_id,
        }
    }
}

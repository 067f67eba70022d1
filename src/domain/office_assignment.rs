//! Office assignments.
//!
//! One-to-zero-or-one with instructors; keyed by the instructor id.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Office assignment domain entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OfficeAssignment {
    /// Instructor the office belongs to
    #[schema(example = 1)]
    pub instructor_id: i32,
    /// Office location
    #[schema(example = "Smith 17")]
    pub location: String,
}

//! Enrollments and grades.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// Letter grade for a completed enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Parse a letter grade, rejecting anything outside A/B/C/D/F
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => Err(AppError::validation(format!("Invalid grade: {}", other))),
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// Enrollment domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
    /// None until a grade is posted
    pub grade: Option<Grade>,
}

/// Enrollment response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    /// Enrollment identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Enrolled course
    #[schema(example = 1050)]
    pub course_id: i32,
    /// Enrolled student
    #[schema(example = 1)]
    pub student_id: i32,
    /// Posted grade, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id,
            course_id: enrollment.course_id,
            student_id: enrollment.student_id,
            grade: enrollment.grade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_parse_valid() {
        assert_eq!(Grade::parse("A").unwrap(), Grade::A);
        assert_eq!(Grade::parse("F").unwrap(), Grade::F);
    }

    #[test]
    fn test_grade_parse_invalid() {
        assert!(Grade::parse("E").is_err());
        assert!(Grade::parse("a").is_err());
        assert!(Grade::parse("").is_err());
    }

    #[test]
    fn test_grade_display_round_trip() {
        for grade in [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F] {
            assert_eq!(Grade::parse(&grade.to_string()).unwrap(), grade);
        }
    }
}

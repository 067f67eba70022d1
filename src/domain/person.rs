//! Students and instructors.
//!
//! Both are stored in the single `Person` table and told apart by a
//! discriminator column; the domain layer exposes them as two types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub last_name: String,
    pub first_mid_name: String,
    pub enrollment_date: DateTime<Utc>,
}

impl Student {
    /// Display name in "Last, First" order
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_mid_name)
    }
}

/// Instructor domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub id: i32,
    pub last_name: String,
    pub first_mid_name: String,
    pub hire_date: DateTime<Utc>,
}

impl Instructor {
    /// Display name in "Last, First" order
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_mid_name)
    }
}

/// Student response (list and detail endpoints)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentResponse {
    /// Student identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Family name
    #[schema(example = "Alexander")]
    pub last_name: String,
    /// First and middle names
    #[schema(example = "Carson")]
    pub first_mid_name: String,
    /// Display name in "Last, First" order
    #[schema(example = "Alexander, Carson")]
    pub full_name: String,
    /// Date the student first enrolled
    pub enrollment_date: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        let full_name = student.full_name();
        Self {
            id: student.id,
            last_name: student.last_name,
            first_mid_name: student.first_mid_name,
            full_name,
            enrollment_date: student.enrollment_date,
        }
    }
}

/// Instructor response, including the office assignment when present
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InstructorResponse {
    /// Instructor identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Family name
    #[schema(example = "Abercrombie")]
    pub last_name: String,
    /// First and middle names
    #[schema(example = "Kim")]
    pub first_mid_name: String,
    /// Display name in "Last, First" order
    #[schema(example = "Abercrombie, Kim")]
    pub full_name: String,
    /// Hire date
    pub hire_date: DateTime<Utc>,
    /// Assigned office, if any
    #[schema(example = "Smith 17")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_location: Option<String>,
}

impl InstructorResponse {
    /// Build a response from an instructor and its optional office
    pub fn with_office(instructor: Instructor, office_location: Option<String>) -> Self {
        let full_name = instructor.full_name();
        Self {
            id: instructor.id,
            last_name: instructor.last_name,
            first_mid_name: instructor.first_mid_name,
            full_name,
            hire_date: instructor.hire_date,
            office_location,
        }
    }
}

impl From<Instructor> for InstructorResponse {
    fn from(instructor: Instructor) -> Self {
        Self::with_office(instructor, None)
    }
}

//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: the school records (people, courses, departments,
//! enrollments, office assignments), the application user wrapped by
//! the identity store adapter, and the password value object.

pub mod course;
pub mod department;
pub mod enrollment;
pub mod office_assignment;
pub mod password;
pub mod person;
pub mod user;

pub use course::{Course, CourseResponse};
pub use department::{Department, DepartmentResponse};
pub use enrollment::{Enrollment, EnrollmentResponse, Grade};
pub use office_assignment::OfficeAssignment;
pub use password::Password;
pub use person::{Instructor, InstructorResponse, Student, StudentResponse};
pub use user::{ApplicationUser, UserResponse};

//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
mod course_repository;
mod department_repository;
mod enrollment_repository;
pub(crate) mod entities;
mod instructor_repository;
mod student_repository;

pub use base::{DeleteRepository, ReadRepository, WriteRepository};
pub use course_repository::{CourseRepository, CourseStore};
pub use department_repository::{DepartmentRepository, DepartmentStore};
pub use enrollment_repository::{EnrollmentRepository, EnrollmentStore};
pub use instructor_repository::{InstructorRepository, InstructorStore};
pub use student_repository::{StudentRepository, StudentStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use department_repository::MockDepartmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use enrollment_repository::MockEnrollmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use instructor_repository::MockInstructorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use student_repository::MockStudentRepository;

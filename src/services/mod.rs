//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! Record services use the Unit of Work pattern for centralized
//! repository access; authentication goes through the identity store
//! contracts instead.

mod auth_service;
pub mod container;
mod course_service;
mod department_service;
mod enrollment_service;
mod instructor_service;
mod student_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use course_service::{CourseManager, CourseService};
pub use department_service::{DepartmentManager, DepartmentService};
pub use enrollment_service::{EnrollmentManager, EnrollmentService};
pub use instructor_service::{InstructorManager, InstructorService};
pub use student_service::{StudentManager, StudentService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

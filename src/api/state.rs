//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AuthService, CourseService, DepartmentService, EnrollmentService, InstructorService,
    ServiceContainer, Services, StudentService,
};

/// Application state containing all services (DI container).
///
/// Use `from_config()` for recommended initialization with full
/// ServiceContainer support.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Student service
    pub student_service: Arc<dyn StudentService>,
    /// Instructor service
    pub instructor_service: Arc<dyn InstructorService>,
    /// Course service
    pub course_service: Arc<dyn CourseService>,
    /// Department service
    pub department_service: Arc<dyn DepartmentService>,
    /// Enrollment service
    pub enrollment_service: Arc<dyn EnrollmentService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        let container = Arc::new(Services::from_connection(database.get_connection(), config));

        Self {
            auth_service: container.auth(),
            student_service: container.students(),
            instructor_service: container.instructors(),
            course_service: container.courses(),
            department_service: container.departments(),
            enrollment_service: container.enrollments(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        student_service: Arc<dyn StudentService>,
        instructor_service: Arc<dyn InstructorService>,
        course_service: Arc<dyn CourseService>,
        department_service: Arc<dyn DepartmentService>,
        enrollment_service: Arc<dyn EnrollmentService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            student_service,
            instructor_service,
            course_service,
            department_service,
            enrollment_service,
            database,
        }
    }
}

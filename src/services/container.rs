//! Service Container - Centralized service access.
//!
//! Provides one object the API layer can hold to reach every
//! application service, wired against the trait objects rather than
//! concrete implementations.

use std::sync::Arc;

use super::{
    AuthService, CourseService, DepartmentService, EnrollmentService, InstructorService,
    StudentService,
};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get student service
    fn students(&self) -> Arc<dyn StudentService>;

    /// Get instructor service
    fn instructors(&self) -> Arc<dyn InstructorService>;

    /// Get course service
    fn courses(&self) -> Arc<dyn CourseService>;

    /// Get department service
    fn departments(&self) -> Arc<dyn DepartmentService>;

    /// Get enrollment service
    fn enrollments(&self) -> Arc<dyn EnrollmentService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    student_service: Arc<dyn StudentService>,
    instructor_service: Arc<dyn InstructorService>,
    course_service: Arc<dyn CourseService>,
    department_service: Arc<dyn DepartmentService>,
    enrollment_service: Arc<dyn EnrollmentService>,
}

impl Services {
    /// Create a new service container with all services initialized
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        student_service: Arc<dyn StudentService>,
        instructor_service: Arc<dyn InstructorService>,
        course_service: Arc<dyn CourseService>,
        department_service: Arc<dyn DepartmentService>,
        enrollment_service: Arc<dyn EnrollmentService>,
    ) -> Self {
        Self {
            auth_service,
            student_service,
            instructor_service,
            course_service,
            department_service,
            enrollment_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{
            Authenticator, CourseManager, DepartmentManager, EnrollmentManager, InstructorManager,
            StudentManager,
        };
        use crate::identity::{ApplicationUserStore, EntityUserStore};

        let uow = Arc::new(Persistence::new(db.clone()));
        let user_store = Arc::new(ApplicationUserStore::new(EntityUserStore::new(db)));

        let auth_service = Arc::new(Authenticator::new(user_store, config));
        let student_service = Arc::new(StudentManager::new(uow.clone()));
        let instructor_service = Arc::new(InstructorManager::new(uow.clone()));
        let course_service = Arc::new(CourseManager::new(uow.clone()));
        let department_service = Arc::new(DepartmentManager::new(uow.clone()));
        let enrollment_service = Arc::new(EnrollmentManager::new(uow));

        Self {
            auth_service,
            student_service,
            instructor_service,
            course_service,
            department_service,
            enrollment_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn students(&self) -> Arc<dyn StudentService> {
        self.student_service.clone()
    }

    fn instructors(&self) -> Arc<dyn InstructorService> {
        self.instructor_service.clone()
    }

    fn courses(&self) -> Arc<dyn CourseService> {
        self.course_service.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentService> {
        self.department_service.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentService> {
        self.enrollment_service.clone()
    }
}

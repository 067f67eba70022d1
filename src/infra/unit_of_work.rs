//! Unit of Work - centralized repository access.
//!
//! Hands services one object that owns every repository instead of
//! five separate constructor arguments. Each repository holds the
//! pooled connection and checks a connection out per operation, so
//! there is no ambient shared context to leak between requests;
//! multi-statement writes open their own transaction inside the
//! repository.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    CourseRepository, CourseStore, DepartmentRepository, DepartmentStore, EnrollmentRepository,
    EnrollmentStore, InstructorRepository, InstructorStore, StudentRepository, StudentStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get student repository
    fn students(&self) -> Arc<dyn StudentRepository>;

    /// Get instructor repository
    fn instructors(&self) -> Arc<dyn InstructorRepository>;

    /// Get course repository
    fn courses(&self) -> Arc<dyn CourseRepository>;

    /// Get department repository
    fn departments(&self) -> Arc<dyn DepartmentRepository>;

    /// Get enrollment repository
    fn enrollments(&self) -> Arc<dyn EnrollmentRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    student_repo: Arc<StudentStore>,
    instructor_repo: Arc<InstructorStore>,
    course_repo: Arc<CourseStore>,
    department_repo: Arc<DepartmentStore>,
    enrollment_repo: Arc<EnrollmentStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance over a pooled connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            student_repo: Arc::new(StudentStore::new(db.clone())),
            instructor_repo: Arc::new(InstructorStore::new(db.clone())),
            course_repo: Arc::new(CourseStore::new(db.clone())),
            department_repo: Arc::new(DepartmentStore::new(db.clone())),
            enrollment_repo: Arc::new(EnrollmentStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn students(&self) -> Arc<dyn StudentRepository> {
        self.student_repo.clone()
    }

    fn instructors(&self) -> Arc<dyn InstructorRepository> {
        self.instructor_repo.clone()
    }

    fn courses(&self) -> Arc<dyn CourseRepository> {
        self.course_repo.clone()
    }

    fn departments(&self) -> Arc<dyn DepartmentRepository> {
        self.department_repo.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentRepository> {
        self.enrollment_repo.clone()
    }
}

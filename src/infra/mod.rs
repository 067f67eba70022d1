//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Record repositories over the ORM entities
//! - Unit of Work for centralized repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CourseRepository, DepartmentRepository, EnrollmentRepository, InstructorRepository,
    StudentRepository,
};
pub use unit_of_work::{Persistence, UnitOfWork};

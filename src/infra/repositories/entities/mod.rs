//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Table and column names are singular and match the published schema
//! exactly; they are the durable contract with the database.

pub mod application_user;
pub mod course;
pub mod course_instructor;
pub mod department;
pub mod enrollment;
pub mod office_assignment;
pub mod person;

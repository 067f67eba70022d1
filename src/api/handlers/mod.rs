//! HTTP request handlers.

pub mod auth_handler;
pub mod course_handler;
pub mod department_handler;
pub mod enrollment_handler;
pub mod instructor_handler;
pub mod student_handler;

pub use auth_handler::{auth_protected_routes, auth_routes};
pub use course_handler::course_routes;
pub use department_handler::department_routes;
pub use enrollment_handler::enrollment_routes;
pub use instructor_handler::instructor_routes;
pub use student_handler::student_routes;

//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, course_handler, department_handler, enrollment_handler, instructor_handler,
    student_handler,
};
use crate::domain::{
    CourseResponse, DepartmentResponse, EnrollmentResponse, Grade, InstructorResponse,
    OfficeAssignment, StudentResponse, UserResponse,
};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Registrar API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registrar API",
        version = "0.1.0",
        description = "University records API covering students, instructors, courses, departments and enrollments",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::change_password,
        // Student endpoints
        student_handler::list_students,
        student_handler::get_student,
        student_handler::create_student,
        student_handler::update_student,
        student_handler::delete_student,
        student_handler::student_enrollments,
        // Instructor endpoints
        instructor_handler::list_instructors,
        instructor_handler::get_instructor,
        instructor_handler::create_instructor,
        instructor_handler::update_instructor,
        instructor_handler::delete_instructor,
        instructor_handler::set_office,
        instructor_handler::clear_office,
        instructor_handler::instructor_courses,
        // Course endpoints
        course_handler::list_courses,
        course_handler::get_course,
        course_handler::create_course,
        course_handler::update_course,
        course_handler::delete_course,
        course_handler::course_instructors,
        course_handler::set_instructors,
        course_handler::assign_instructor,
        course_handler::unassign_instructor,
        course_handler::course_enrollments,
        // Department endpoints
        department_handler::list_departments,
        department_handler::get_department,
        department_handler::create_department,
        department_handler::update_department,
        department_handler::delete_department,
        // Enrollment endpoints
        enrollment_handler::get_enrollment,
        enrollment_handler::enroll,
        enrollment_handler::set_grade,
        enrollment_handler::withdraw,
    ),
    components(
        schemas(
            // Domain types
            StudentResponse,
            InstructorResponse,
            CourseResponse,
            DepartmentResponse,
            EnrollmentResponse,
            OfficeAssignment,
            Grade,
            UserResponse,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::ChangePasswordRequest,
            TokenResponse,
            // Request types
            student_handler::CreateStudentRequest,
            student_handler::UpdateStudentRequest,
            instructor_handler::CreateInstructorRequest,
            instructor_handler::UpdateInstructorRequest,
            instructor_handler::SetOfficeRequest,
            course_handler::CreateCourseRequest,
            course_handler::UpdateCourseRequest,
            course_handler::SetInstructorsRequest,
            department_handler::CreateDepartmentRequest,
            department_handler::UpdateDepartmentRequest,
            enrollment_handler::EnrollRequest,
            enrollment_handler::SetGradeRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Students", description = "Student record management"),
        (name = "Instructors", description = "Instructor and office management"),
        (name = "Courses", description = "Course catalog and teaching assignments"),
        (name = "Departments", description = "Department management with concurrency tokens"),
        (name = "Enrollments", description = "Enrollment and grading operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}

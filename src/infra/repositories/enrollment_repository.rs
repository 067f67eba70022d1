//! Enrollment repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::base::{DeleteRepository, ReadRepository};
use super::entities::enrollment;
use crate::domain::{Enrollment, Grade};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Enrollment repository contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find an enrollment by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Enrollment>>;

    /// Find an enrollment by its (course, student) pair
    async fn find_by_course_and_student(
        &self,
        course_id: i32,
        student_id: i32,
    ) -> AppResult<Option<Enrollment>>;

    /// All enrollments for a student
    async fn list_for_student(&self, student_id: i32) -> AppResult<Vec<Enrollment>>;

    /// All enrollments for a course
    async fn list_for_course(&self, course_id: i32) -> AppResult<Vec<Enrollment>>;

    /// Record an enrollment with no grade yet
    async fn create(&self, course_id: i32, student_id: i32) -> AppResult<Enrollment>;

    /// Post or clear the grade
    async fn set_grade(&self, id: i32, grade: Option<Grade>) -> AppResult<Enrollment>;

    /// Remove an enrollment
    async fn delete(&self, id: i32) -> AppResult<()>;
}

fn to_enrollment(model: enrollment::Model) -> AppResult<Enrollment> {
    let grade = model.grade.as_deref().map(Grade::parse).transpose()?;
    Ok(Enrollment {
        id: model.id,
        course_id: model.course_id,
        student_id: model.student_id,
        grade,
    })
}

/// SeaORM-backed enrollment repository
pub struct EnrollmentStore {
    db: DatabaseConnection,
}

impl EnrollmentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<enrollment::Entity, enrollment::Model> for EnrollmentStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<enrollment::Entity> for EnrollmentStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Enrollment>> {
        let result = ReadRepository::find_by_id(self, id).await?;
        result.map(to_enrollment).transpose()
    }

    async fn find_by_course_and_student(
        &self,
        course_id: i32,
        student_id: i32,
    ) -> AppResult<Option<Enrollment>> {
        let result = enrollment::Entity::find()
            .filter(enrollment::Column::CourseId.eq(course_id))
            .filter(enrollment::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await?;

        result.map(to_enrollment).transpose()
    }

    async fn list_for_student(&self, student_id: i32) -> AppResult<Vec<Enrollment>> {
        let models = enrollment::Entity::find()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(enrollment::Column::CourseId)
            .all(&self.db)
            .await?;

        models.into_iter().map(to_enrollment).collect()
    }

    async fn list_for_course(&self, course_id: i32) -> AppResult<Vec<Enrollment>> {
        let models = enrollment::Entity::find()
            .filter(enrollment::Column::CourseId.eq(course_id))
            .order_by_asc(enrollment::Column::StudentId)
            .all(&self.db)
            .await?;

        models.into_iter().map(to_enrollment).collect()
    }

    async fn create(&self, course_id: i32, student_id: i32) -> AppResult<Enrollment> {
        let active_model = enrollment::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            grade: Set(None),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        to_enrollment(model)
    }

    async fn set_grade(&self, id: i32, grade: Option<Grade>) -> AppResult<Enrollment> {
        let enrollment = ReadRepository::find_by_id(self, id)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: enrollment::ActiveModel = enrollment.into();
        active.grade = Set(grade.map(|g| g.to_string()));

        let model = active.update(&self.db).await?;
        to_enrollment(model)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        ReadRepository::find_by_id(self, id)
            .await?
            .ok_or(AppError::NotFound)?;

        DeleteRepository::delete_by_id(self, id).await
    }
}

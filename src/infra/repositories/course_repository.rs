//! Course repository, including the CourseInstructor join-table
//! management for the many-to-many teaching assignment.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
    TransactionTrait,
};

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::{course, course_instructor, person};
use crate::config::DISCRIMINATOR_INSTRUCTOR;
use crate::domain::{Course, Instructor};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Course repository contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find a course by its registrar-assigned number
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Course>>;

    /// List courses with total count
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Course>, u64)>;

    /// Create a course; the id comes from the caller
    async fn create(
        &self,
        id: i32,
        title: String,
        credits: i32,
        department_id: i32,
    ) -> AppResult<Course>;

    /// Update course fields
    async fn update(
        &self,
        id: i32,
        title: Option<String>,
        credits: Option<i32>,
        department_id: Option<i32>,
    ) -> AppResult<Course>;

    /// Delete a course; enrollments and teaching links cascade
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Instructors assigned to the course
    async fn instructors(&self, id: i32) -> AppResult<Vec<Instructor>>;

    /// Link an instructor to the course
    async fn assign_instructor(&self, id: i32, instructor_id: i32) -> AppResult<()>;

    /// Unlink an instructor from the course
    async fn unassign_instructor(&self, id: i32, instructor_id: i32) -> AppResult<()>;

    /// Replace the full set of assigned instructors atomically
    async fn set_instructors(&self, id: i32, instructor_ids: Vec<i32>) -> AppResult<()>;
}

fn to_course(model: course::Model) -> Course {
    Course {
        id: model.id,
        title: model.title,
        credits: model.credits,
        department_id: model.department_id,
    }
}

fn to_instructor(model: person::Model) -> Instructor {
    Instructor {
        id: model.id,
        last_name: model.last_name,
        first_mid_name: model.first_mid_name,
        hire_date: model.hire_date.unwrap_or_default(),
    }
}

/// SeaORM-backed course repository
pub struct CourseStore {
    db: DatabaseConnection,
}

impl CourseStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn require_course(&self, id: i32) -> AppResult<course::Model> {
        ReadRepository::find_by_id(self, id)
            .await?
            .ok_or(AppError::NotFound)
    }
}

impl ReadRepository<course::Entity, course::Model> for CourseStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<course::Entity, course::Model, course::ActiveModel> for CourseStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<course::Entity> for CourseStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Course>> {
        let result = ReadRepository::find_by_id(self, id).await?;
        Ok(result.map(to_course))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Course>, u64)> {
        let (data, total) = ReadRepository::find_paginated(self, params).await?;
        Ok((data.into_iter().map(to_course).collect(), total))
    }

    async fn create(
        &self,
        id: i32,
        title: String,
        credits: i32,
        department_id: i32,
    ) -> AppResult<Course> {
        if ReadRepository::find_by_id(self, id).await?.is_some() {
            return Err(AppError::conflict("Course"));
        }

        let active_model = course::ActiveModel {
            id: Set(id),
            title: Set(title),
            credits: Set(credits),
            department_id: Set(department_id),
        };

        let model = WriteRepository::insert(self, active_model).await?;
        Ok(to_course(model))
    }

    async fn update(
        &self,
        id: i32,
        title: Option<String>,
        credits: Option<i32>,
        department_id: Option<i32>,
    ) -> AppResult<Course> {
        let course = self.require_course(id).await?;

        let mut active: course::ActiveModel = course.into();

        if let Some(title) = title {
            active.title = Set(title);
        }
        if let Some(credits) = credits {
            active.credits = Set(credits);
        }
        if let Some(department_id) = department_id {
            active.department_id = Set(department_id);
        }

        let model = WriteRepository::update(self, active).await?;
        Ok(to_course(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.require_course(id).await?;
        DeleteRepository::delete_by_id(self, id).await
    }

    async fn instructors(&self, id: i32) -> AppResult<Vec<Instructor>> {
        let course = self.require_course(id).await?;

        let people = course
            .find_related(person::Entity)
            .order_by_asc(person::Column::LastName)
            .all(&self.db)
            .await?;

        Ok(people.into_iter().map(to_instructor).collect())
    }

    async fn assign_instructor(&self, id: i32, instructor_id: i32) -> AppResult<()> {
        self.require_course(id).await?;

        // Only Person rows with the Instructor discriminator may teach
        person::Entity::find()
            .filter(person::Column::Id.eq(instructor_id))
            .filter(person::Column::Discriminator.eq(DISCRIMINATOR_INSTRUCTOR))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let existing = course_instructor::Entity::find_by_id((id, instructor_id))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(AppError::conflict("Course assignment"));
        }

        course_instructor::ActiveModel {
            course_id: Set(id),
            instructor_id: Set(instructor_id),
        }
        .insert(&self.db)
        .await?;

        Ok(())
    }

    async fn unassign_instructor(&self, id: i32, instructor_id: i32) -> AppResult<()> {
        let result = course_instructor::Entity::delete_by_id((id, instructor_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn set_instructors(&self, id: i32, instructor_ids: Vec<i32>) -> AppResult<()> {
        self.require_course(id).await?;

        let mut instructor_ids = instructor_ids;
        instructor_ids.sort_unstable();
        instructor_ids.dedup();

        let valid = person::Entity::find()
            .filter(person::Column::Id.is_in(instructor_ids.clone()))
            .filter(person::Column::Discriminator.eq(DISCRIMINATOR_INSTRUCTOR))
            .all(&self.db)
            .await?;
        if valid.len() != instructor_ids.len() {
            return Err(AppError::NotFound);
        }

        // Replace the join rows atomically
        let txn = self.db.begin().await?;

        course_instructor::Entity::delete_many()
            .filter(course_instructor::Column::CourseId.eq(id))
            .exec(&txn)
            .await?;

        for instructor_id in instructor_ids {
            course_instructor::ActiveModel {
                course_id: Set(id),
                instructor_id: Set(instructor_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(())
    }
}

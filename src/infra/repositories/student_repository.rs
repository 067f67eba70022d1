//! Student repository - Person rows carrying the Student discriminator.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::person;
use crate::config::DISCRIMINATOR_STUDENT;
use crate::domain::Student;
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Student repository contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find a student by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>>;

    /// List students ordered by last name, with total count
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Student>, u64)>;

    /// Create a new student
    async fn create(
        &self,
        last_name: String,
        first_mid_name: String,
        enrollment_date: DateTime<Utc>,
    ) -> AppResult<Student>;

    /// Update student fields
    async fn update(
        &self,
        id: i32,
        last_name: Option<String>,
        first_mid_name: Option<String>,
        enrollment_date: Option<DateTime<Utc>>,
    ) -> AppResult<Student>;

    /// Delete a student; enrollments cascade at the database level
    async fn delete(&self, id: i32) -> AppResult<()>;
}

fn to_student(model: person::Model) -> Student {
    Student {
        id: model.id,
        last_name: model.last_name,
        first_mid_name: model.first_mid_name,
        // The discriminator guarantees this is set; the fallback only
        // guards against hand-edited rows.
        enrollment_date: model.enrollment_date.unwrap_or_default(),
    }
}

/// SeaORM-backed student repository
pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn students() -> sea_orm::Select<person::Entity> {
        person::Entity::find().filter(person::Column::Discriminator.eq(DISCRIMINATOR_STUDENT))
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>> {
        let result = Self::students()
            .filter(person::Column::Id.eq(id))
            .one(&self.db)
            .await?;

        Ok(result.map(to_student))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Student>, u64)> {
        let paginator = Self::students()
            .order_by_asc(person::Column::LastName)
            .paginate(&self.db, params.limit());

        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((data.into_iter().map(to_student).collect(), total))
    }

    async fn create(
        &self,
        last_name: String,
        first_mid_name: String,
        enrollment_date: DateTime<Utc>,
    ) -> AppResult<Student> {
        let active_model = person::ActiveModel {
            last_name: Set(last_name),
            first_mid_name: Set(first_mid_name),
            hire_date: Set(None),
            enrollment_date: Set(Some(enrollment_date)),
            discriminator: Set(DISCRIMINATOR_STUDENT.to_string()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(to_student(model))
    }

    async fn update(
        &self,
        id: i32,
        last_name: Option<String>,
        first_mid_name: Option<String>,
        enrollment_date: Option<DateTime<Utc>>,
    ) -> AppResult<Student> {
        let person = Self::students()
            .filter(person::Column::Id.eq(id))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: person::ActiveModel = person.into();

        if let Some(last_name) = last_name {
            active.last_name = Set(last_name);
        }
        if let Some(first_mid_name) = first_mid_name {
            active.first_mid_name = Set(first_mid_name);
        }
        if let Some(enrollment_date) = enrollment_date {
            active.enrollment_date = Set(Some(enrollment_date));
        }

        let model = active.update(&self.db).await?;
        Ok(to_student(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        // Confirm the row is a student before deleting; a bare
        // delete_by_id would happily remove an instructor.
        let person = Self::students()
            .filter(person::Column::Id.eq(id))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        person::Entity::delete_by_id(person.id).exec(&self.db).await?;
        Ok(())
    }
}

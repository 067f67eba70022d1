//! Instructor repository - Person rows carrying the Instructor
//! discriminator, plus the office assignment that hangs off them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::entities::{course, course_instructor, office_assignment, person};
use crate::config::DISCRIMINATOR_INSTRUCTOR;
use crate::domain::{Course, Instructor, OfficeAssignment};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Instructor repository contract
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait InstructorRepository: Send + Sync {
    /// Find an instructor by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Instructor>>;

    /// List instructors ordered by last name, with total count
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Instructor>, u64)>;

    /// Create a new instructor
    async fn create(
        &self,
        last_name: String,
        first_mid_name: String,
        hire_date: DateTime<Utc>,
    ) -> AppResult<Instructor>;

    /// Update instructor fields
    async fn update(
        &self,
        id: i32,
        last_name: Option<String>,
        first_mid_name: Option<String>,
        hire_date: Option<DateTime<Utc>>,
    ) -> AppResult<Instructor>;

    /// Delete an instructor; office assignment and course links
    /// cascade at the database level
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Get the instructor's office assignment, if any
    async fn find_office(&self, id: i32) -> AppResult<Option<OfficeAssignment>>;

    /// Create or replace the instructor's office assignment
    async fn upsert_office(&self, id: i32, location: String) -> AppResult<OfficeAssignment>;

    /// Remove the instructor's office assignment
    async fn clear_office(&self, id: i32) -> AppResult<()>;

    /// Courses taught by the instructor
    async fn courses(&self, id: i32) -> AppResult<Vec<Course>>;
}

fn to_instructor(model: person::Model) -> Instructor {
    Instructor {
        id: model.id,
        last_name: model.last_name,
        first_mid_name: model.first_mid_name,
        // The discriminator guarantees this is set; the fallback only
        // guards against hand-edited rows.
        hire_date: model.hire_date.unwrap_or_default(),
    }
}

fn to_course(model: course::Model) -> Course {
    Course {
        id: model.id,
        title: model.title,
        credits: model.credits,
        department_id: model.department_id,
    }
}

/// SeaORM-backed instructor repository
pub struct InstructorStore {
    db: DatabaseConnection,
}

impl InstructorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn instructors() -> sea_orm::Select<person::Entity> {
        person::Entity::find().filter(person::Column::Discriminator.eq(DISCRIMINATOR_INSTRUCTOR))
    }

    async fn require_instructor(&self, id: i32) -> AppResult<person::Model> {
        Self::instructors()
            .filter(person::Column::Id.eq(id))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }
}

#[async_trait]
impl InstructorRepository for InstructorStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Instructor>> {
        let result = Self::instructors()
            .filter(person::Column::Id.eq(id))
            .one(&self.db)
            .await?;

        Ok(result.map(to_instructor))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<Instructor>, u64)> {
        let paginator = Self::instructors()
            .order_by_asc(person::Column::LastName)
            .paginate(&self.db, params.limit());

        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((data.into_iter().map(to_instructor).collect(), total))
    }

    async fn create(
        &self,
        last_name: String,
        first_mid_name: String,
        hire_date: DateTime<Utc>,
    ) -> AppResult<Instructor> {
        let active_model = person::ActiveModel {
            last_name: Set(last_name),
            first_mid_name: Set(first_mid_name),
            hire_date: Set(Some(hire_date)),
            enrollment_date: Set(None),
            discriminator: Set(DISCRIMINATOR_INSTRUCTOR.to_string()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(to_instructor(model))
    }

    async fn update(
        &self,
        id: i32,
        last_name: Option<String>,
        first_mid_name: Option<String>,
        hire_date: Option<DateTime<Utc>>,
    ) -> AppResult<Instructor> {
        let person = self.require_instructor(id).await?;

        let mut active: person::ActiveModel = person.into();

        if let Some(last_name) = last_name {
            active.last_name = Set(last_name);
        }
        if let Some(first_mid_name) = first_mid_name {
            active.first_mid_name = Set(first_mid_name);
        }
        if let Some(hire_date) = hire_date {
            active.hire_date = Set(Some(hire_date));
        }

        let model = active.update(&self.db).await?;
        Ok(to_instructor(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let person = self.require_instructor(id).await?;

        // Clear the administrator reference and remove the person in
        // one transaction; office and course links cascade.
        let txn = self.db.begin().await?;

        use super::entities::department;
        department::Entity::update_many()
            .col_expr(department::Column::InstructorId, sea_orm::sea_query::Expr::value(Option::<i32>::None))
            .filter(department::Column::InstructorId.eq(person.id))
            .exec(&txn)
            .await?;

        person::Entity::delete_by_id(person.id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn find_office(&self, id: i32) -> AppResult<Option<OfficeAssignment>> {
        let result = office_assignment::Entity::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(result.map(|m| OfficeAssignment {
            instructor_id: m.instructor_id,
            location: m.location,
        }))
    }

    async fn upsert_office(&self, id: i32, location: String) -> AppResult<OfficeAssignment> {
        self.require_instructor(id).await?;

        let existing = office_assignment::Entity::find_by_id(id)
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(existing) => {
                let mut active: office_assignment::ActiveModel = existing.into();
                active.location = Set(location);
                active.update(&self.db).await?
            }
            None => {
                office_assignment::ActiveModel {
                    instructor_id: Set(id),
                    location: Set(location),
                }
                .insert(&self.db)
                .await?
            }
        };

        Ok(OfficeAssignment {
            instructor_id: model.instructor_id,
            location: model.location,
        })
    }

    async fn clear_office(&self, id: i32) -> AppResult<()> {
        let result = office_assignment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn courses(&self, id: i32) -> AppResult<Vec<Course>> {
        self.require_instructor(id).await?;

        let links = course_instructor::Entity::find()
            .filter(course_instructor::Column::InstructorId.eq(id))
            .all(&self.db)
            .await?;

        let course_ids: Vec<i32> = links.into_iter().map(|l| l.course_id).collect();
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = course::Entity::find()
            .filter(course::Column::Id.is_in(course_ids))
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await?;

        Ok(courses.into_iter().map(to_course).collect())
    }
}

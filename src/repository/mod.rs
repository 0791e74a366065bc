use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::course::{Course, NewCourse};
use crate::domain::types::{CategoryId, CourseId};

pub mod category;
pub mod course;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories in id order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Read-only operations for course entities.
pub trait CourseReader {
    /// List all courses in id (insertion) order.
    fn list_courses(&self) -> RepositoryResult<Vec<Course>>;
    /// Retrieve a course by its identifier.
    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>>;
    /// Return stored courses (other than `exclude`) whose inclusive
    /// `[start_date, end_date]` interval intersects the given one.
    fn find_overlapping(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude: Option<CourseId>,
    ) -> RepositoryResult<Vec<Course>>;
}

/// Write operations for course entities.
pub trait CourseWriter {
    /// Persist a new course and return the stored row with its assigned id.
    fn create_course(&self, course: &NewCourse) -> RepositoryResult<Course>;
    /// Replace all fields of the row matching the course's id. Returns the
    /// affected row count, 0 when the row no longer exists.
    fn update_course(&self, course: &Course) -> RepositoryResult<usize>;
    /// Delete a course by id. Returns the affected row count.
    fn delete_course(&self, id: CourseId) -> RepositoryResult<usize>;
}

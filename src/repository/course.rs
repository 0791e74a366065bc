use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::course::{Course, NewCourse};
use crate::domain::types::CourseId;
use crate::models::course::{Course as DbCourse, NewCourse as DbNewCourse};
use crate::repository::{CourseReader, CourseWriter, DieselRepository, RepositoryResult};

impl CourseReader for DieselRepository {
    fn list_courses(&self) -> RepositoryResult<Vec<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let items = courses::table
            .order(courses::id.asc())
            .load::<DbCourse>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Course>, _>>()?;

        Ok(items)
    }

    fn get_course_by_id(&self, id: CourseId) -> RepositoryResult<Option<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let course = courses::table
            .find(id.get())
            .first::<DbCourse>(&mut conn)
            .optional()?;

        let course = course.map(TryInto::try_into).transpose()?;
        Ok(course)
    }

    fn find_overlapping(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        exclude: Option<CourseId>,
    ) -> RepositoryResult<Vec<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        // Inclusive intersection: stored.start <= end AND stored.end >= start.
        let mut query = courses::table
            .filter(courses::start_date.le(end_date))
            .filter(courses::end_date.ge(start_date))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(exclude) = exclude {
            query = query.filter(courses::id.ne(exclude.get()));
        }

        let items = query
            .order(courses::id.asc())
            .load::<DbCourse>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Course>, _>>()?;

        Ok(items)
    }
}

impl CourseWriter for DieselRepository {
    fn create_course(&self, course: &NewCourse) -> RepositoryResult<Course> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let db_course: DbNewCourse = course.clone().into();

        let inserted = diesel::insert_into(courses::table)
            .values(db_course)
            .get_result::<DbCourse>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn update_course(&self, course: &Course) -> RepositoryResult<usize> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let changes: DbNewCourse = course.clone().into();

        let affected = diesel::update(courses::table.find(course.id.get()))
            .set(changes)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_course(&self, id: CourseId) -> RepositoryResult<usize> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let affected = diesel::delete(courses::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::course::{Course as DomainCourse, NewCourse as DomainNewCourse};
use crate::domain::types::{CourseDescription, StudentCount, TypeConstraintError};

/// Diesel model representing the `courses` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::courses)]
pub struct Course {
    pub id: i32,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub student_amount: Option<i32>,
    pub category_id: i32,
}

/// Insertable/patchable form of [`Course`]. Updates replace every field,
/// so an absent `student_amount` writes NULL instead of being skipped.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::courses)]
#[diesel(treat_none_as_null = true)]
pub struct NewCourse {
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub student_amount: Option<i32>,
    pub category_id: i32,
}

impl TryFrom<Course> for DomainCourse {
    type Error = TypeConstraintError;

    fn try_from(course: Course) -> Result<Self, Self::Error> {
        Ok(Self {
            id: course.id.try_into()?,
            description: CourseDescription::new(course.description)?,
            start_date: course.start_date,
            end_date: course.end_date,
            student_amount: course.student_amount.map(StudentCount::new).transpose()?,
            category_id: course.category_id.try_into()?,
        })
    }
}

impl From<DomainNewCourse> for NewCourse {
    fn from(course: DomainNewCourse) -> Self {
        Self {
            description: course.description.into_inner(),
            start_date: course.start_date,
            end_date: course.end_date,
            student_amount: course.student_amount.map(StudentCount::get),
            category_id: course.category_id.get(),
        }
    }
}

impl From<DomainCourse> for NewCourse {
    fn from(course: DomainCourse) -> Self {
        Self {
            description: course.description.into_inner(),
            start_date: course.start_date,
            end_date: course.end_date,
            student_amount: course.student_amount.map(StudentCount::get),
            category_id: course.category_id.get(),
        }
    }
}

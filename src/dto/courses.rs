use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::course::Course;

/// JSON representation of a course returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i32,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub student_amount: Option<i32>,
    pub category_id: i32,
}

impl From<Course> for CourseDto {
    fn from(value: Course) -> Self {
        Self {
            id: value.id.get(),
            description: value.description.into_inner(),
            start_date: value.start_date,
            end_date: value.end_date,
            student_amount: value.student_amount.map(|s| s.get()),
            category_id: value.category_id.get(),
        }
    }
}

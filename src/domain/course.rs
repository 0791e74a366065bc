use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CourseDescription, CourseId, StudentCount};

/// Scheduled training offering with an inclusive date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub description: CourseDescription,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub student_amount: Option<StudentCount>,
    pub category_id: CategoryId,
}

/// Data required to insert a new [`Course`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCourse {
    pub description: CourseDescription,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub student_amount: Option<StudentCount>,
    pub category_id: CategoryId,
}

impl Course {
    /// Whether this course's `[start_date, end_date]` interval intersects
    /// the given one. Boundaries are inclusive, so touching endpoints
    /// count as an overlap.
    pub fn overlaps(&self, start_date: NaiveDate, end_date: NaiveDate) -> bool {
        self.start_date <= end_date && start_date <= self.end_date
    }
}

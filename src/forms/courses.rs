use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::course::{Course, NewCourse};
use crate::domain::types::{
    CategoryId, CourseDescription, CourseId, StudentCount, TypeConstraintError,
};

/// Wire shape of a course submitted over HTTP. `id` is absent on create
/// and required on update, where it must match the path.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseForm {
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 0))]
    pub student_amount: Option<i32>,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseFormPayload {
    pub id: Option<CourseId>,
    pub description: CourseDescription,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub student_amount: Option<StudentCount>,
    pub category_id: CategoryId,
}

impl CourseFormPayload {
    pub fn into_new_course(self) -> NewCourse {
        NewCourse {
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            student_amount: self.student_amount,
            category_id: self.category_id,
        }
    }

    /// Build the full course representation persisted by an update.
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            student_amount: self.student_amount,
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Error)]
pub enum CourseFormError {
    #[error("Course form validation failed: {0}")]
    Validation(String),
    #[error("Course form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CourseFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CourseFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CourseForm> for CourseFormPayload {
    type Error = CourseFormError;

    fn try_from(value: CourseForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            id: value.id.map(CourseId::new).transpose()?,
            description: CourseDescription::new(value.description)?,
            start_date: value.start_date,
            end_date: value.end_date,
            student_amount: value.student_amount.map(StudentCount::new).transpose()?,
            category_id: CategoryId::new(value.category_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CourseForm {
        CourseForm {
            id: None,
            description: "Rust Basics".to_string(),
            start_date: "2025-01-01".parse().unwrap(),
            end_date: "2025-01-10".parse().unwrap(),
            student_amount: Some(20),
            category_id: 2,
        }
    }

    #[test]
    fn converts_valid_form() {
        let payload: CourseFormPayload = form().try_into().unwrap();
        assert_eq!(payload.description.as_str(), "Rust Basics");
        assert_eq!(payload.category_id.get(), 2);
        assert_eq!(payload.student_amount.unwrap().get(), 20);
    }

    #[test]
    fn rejects_empty_description() {
        let mut form = form();
        form.description = String::new();
        assert!(CourseFormPayload::try_from(form).is_err());
    }

    #[test]
    fn rejects_whitespace_only_description() {
        let mut form = form();
        form.description = "   ".to_string();
        assert!(CourseFormPayload::try_from(form).is_err());
    }

    #[test]
    fn rejects_non_positive_category() {
        let mut form = form();
        form.category_id = 0;
        assert!(CourseFormPayload::try_from(form).is_err());
    }

    #[test]
    fn rejects_negative_student_amount() {
        let mut form = form();
        form.student_amount = Some(-1);
        assert!(CourseFormPayload::try_from(form).is_err());
    }

    #[test]
    fn student_amount_is_optional() {
        let mut form = form();
        form.student_amount = None;
        let payload: CourseFormPayload = form.try_into().unwrap();
        assert_eq!(payload.student_amount, None);
    }
}

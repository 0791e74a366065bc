use chrono::{NaiveDate, Utc};

use crate::domain::types::CourseId;
use crate::dto::courses::CourseDto;
use crate::forms::courses::CourseFormPayload;
use crate::repository::{CategoryReader, CourseReader, CourseWriter};

use super::{ServiceError, ServiceResult};

pub fn list_courses<R>(repo: &R) -> ServiceResult<Vec<CourseDto>>
where
    R: CourseReader,
{
    match repo.list_courses() {
        Ok(courses) => Ok(courses.into_iter().map(CourseDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list courses: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_course<R>(id: CourseId, repo: &R) -> ServiceResult<CourseDto>
where
    R: CourseReader,
{
    match repo.get_course_by_id(id) {
        Ok(Some(course)) => Ok(course.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get course: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_course<R>(payload: CourseFormPayload, repo: &R) -> ServiceResult<CourseDto>
where
    R: CourseReader + CourseWriter + CategoryReader,
{
    validate_course(&payload, None, Utc::now().date_naive(), repo)?;

    match repo.create_course(&payload.into_new_course()) {
        Ok(course) => Ok(course.into()),
        Err(e) => {
            log::error!("Failed to create course: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace all fields of the course at `id`. Path/body id agreement is
/// checked at the route boundary before this runs; validation runs before
/// the target's existence is observed, so an invalid payload is rejected
/// even when the course is gone.
pub fn update_course<R>(id: CourseId, payload: CourseFormPayload, repo: &R) -> ServiceResult<()>
where
    R: CourseReader + CourseWriter + CategoryReader,
{
    validate_course(&payload, Some(id), Utc::now().date_naive(), repo)?;

    match repo.update_course(&payload.into_course(id)) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update course: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_course<R>(id: CourseId, repo: &R) -> ServiceResult<CourseDto>
where
    R: CourseReader + CourseWriter,
{
    let course = match repo.get_course_by_id(id) {
        Ok(Some(course)) => course,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get course: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.delete_course(id) {
        Ok(_) => Ok(course.into()),
        Err(e) => {
            log::error!("Failed to delete course: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Ordered domain rules applied before any persistence; the first failing
/// rule short-circuits with its message. `exclude` removes the course's
/// own id from the overlap check on update.
fn validate_course<R>(
    payload: &CourseFormPayload,
    exclude: Option<CourseId>,
    today: NaiveDate,
    repo: &R,
) -> ServiceResult<()>
where
    R: CourseReader + CategoryReader,
{
    match repo.get_category_by_id(payload.category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::Validation("Category not found".into())),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    if payload.start_date < today {
        return Err(ServiceError::Validation(
            "Start date earlier than today".into(),
        ));
    }

    if payload.start_date > payload.end_date {
        return Err(ServiceError::Validation(
            "Start date later than end date".into(),
        ));
    }

    match repo.find_overlapping(payload.start_date, payload.end_date, exclude) {
        Ok(overlapping) if overlapping.is_empty() => Ok(()),
        Ok(_) => Err(ServiceError::Validation(
            "An overlapping course already exists in the given period".into(),
        )),
        Err(e) => {
            log::error!("Failed to query overlapping courses: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{
        CategoryDescription, CategoryId, CourseDescription, StudentCount,
    };
    use crate::repository::test::TestRepository;
    use chrono::Days;

    fn seeded_repo() -> TestRepository {
        let categories = [
            (1, "Comportamental"),
            (2, "Programação"),
            (3, "Qualidade"),
            (4, "Processos"),
        ]
        .into_iter()
        .map(|(id, description)| Category {
            id: CategoryId::new(id).unwrap(),
            description: CategoryDescription::new(description).unwrap(),
        })
        .collect();
        TestRepository::new(categories)
    }

    fn payload(category_id: i32, start_in_days: u64, end_in_days: u64) -> CourseFormPayload {
        let today = Utc::now().date_naive();
        CourseFormPayload {
            id: None,
            description: CourseDescription::new("Go Basics").unwrap(),
            start_date: today.checked_add_days(Days::new(start_in_days)).unwrap(),
            end_date: today.checked_add_days(Days::new(end_in_days)).unwrap(),
            student_amount: Some(StudentCount::new(20).unwrap()),
            category_id: CategoryId::new(category_id).unwrap(),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let repo = seeded_repo();

        let err = create_course(payload(99, 1, 10), &repo).unwrap_err();
        assert_eq!(err, ServiceError::Validation("Category not found".into()));
    }

    #[test]
    fn rejects_start_date_in_the_past() {
        let repo = seeded_repo();
        let mut payload = payload(2, 1, 10);
        payload.start_date = Utc::now().date_naive().pred_opt().unwrap();

        let err = create_course(payload, &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation("Start date earlier than today".into())
        );
    }

    #[test]
    fn rejects_start_date_after_end_date() {
        let repo = seeded_repo();

        let err = create_course(payload(2, 10, 5), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation("Start date later than end date".into())
        );
    }

    #[test]
    fn category_rule_wins_over_date_rules() {
        let repo = seeded_repo();

        // Both the category and the date ordering are invalid; the
        // category message is returned.
        let err = create_course(payload(99, 10, 5), &repo).unwrap_err();
        assert_eq!(err, ServiceError::Validation("Category not found".into()));
    }

    #[test]
    fn rejects_overlapping_period() {
        let repo = seeded_repo();
        create_course(payload(2, 1, 10), &repo).unwrap();

        let err = create_course(payload(2, 5, 15), &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation(
                "An overlapping course already exists in the given period".into()
            )
        );
    }

    #[test]
    fn touching_endpoints_count_as_overlap() {
        let repo = seeded_repo();
        create_course(payload(2, 1, 10), &repo).unwrap();

        let err = create_course(payload(3, 10, 20), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn adjacent_periods_do_not_overlap() {
        let repo = seeded_repo();
        create_course(payload(2, 1, 10), &repo).unwrap();

        assert!(create_course(payload(2, 11, 20), &repo).is_ok());
    }

    #[test]
    fn create_assigns_id_and_round_trips() {
        let repo = seeded_repo();

        let created = create_course(payload(2, 1, 10), &repo).unwrap();
        assert_eq!(created.id, 1);

        let fetched = get_course(CourseId::new(created.id).unwrap(), &repo).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.description, "Go Basics");
        assert_eq!(fetched.student_amount, Some(20));
    }

    #[test]
    fn update_excludes_own_period_from_overlap_check() {
        let repo = seeded_repo();
        let created = create_course(payload(2, 1, 10), &repo).unwrap();
        let id = CourseId::new(created.id).unwrap();

        // Re-submitting the same period for the same course must pass.
        let mut updated = payload(3, 1, 10);
        updated.id = Some(id);
        update_course(id, updated, &repo).unwrap();

        let fetched = get_course(id, &repo).unwrap();
        assert_eq!(fetched.category_id, 3);
    }

    #[test]
    fn update_rejects_overlap_with_other_courses() {
        let repo = seeded_repo();
        create_course(payload(2, 1, 10), &repo).unwrap();
        let second = create_course(payload(2, 11, 20), &repo).unwrap();
        let id = CourseId::new(second.id).unwrap();

        let mut moved = payload(2, 5, 20);
        moved.id = Some(id);
        let err = update_course(id, moved, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn update_missing_course_is_not_found() {
        let repo = seeded_repo();

        let err = update_course(CourseId::new(42).unwrap(), payload(2, 1, 10), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn update_validates_before_checking_existence() {
        let repo = seeded_repo();

        let err = update_course(CourseId::new(42).unwrap(), payload(99, 1, 10), &repo).unwrap_err();
        assert_eq!(err, ServiceError::Validation("Category not found".into()));
    }

    #[test]
    fn delete_returns_removed_course_then_not_found() {
        let repo = seeded_repo();
        let created = create_course(payload(2, 1, 10), &repo).unwrap();
        let id = CourseId::new(created.id).unwrap();

        let removed = delete_course(id, &repo).unwrap();
        assert_eq!(removed, created);

        assert_eq!(get_course(id, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(delete_course(id, &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn list_returns_courses_in_insertion_order() {
        let repo = seeded_repo();
        create_course(payload(2, 1, 10), &repo).unwrap();
        create_course(payload(3, 11, 20), &repo).unwrap();

        let courses = list_courses(&repo).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, 1);
        assert_eq!(courses[1].id, 2);
    }

    #[test]
    fn validation_order_is_stable_for_fixed_dates() {
        let repo = seeded_repo();
        let today: NaiveDate = "2025-06-01".parse().unwrap();
        let mut payload = payload(2, 0, 0);
        payload.start_date = "2025-05-31".parse().unwrap();
        payload.end_date = "2025-05-30".parse().unwrap();

        // Start-before-today is checked before start-after-end.
        let err = validate_course(&payload, None, today, &repo).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation("Start date earlier than today".into())
        );
    }
}

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::types::CourseId;
use crate::dto::errors::ErrorBody;
use crate::forms::courses::{CourseForm, CourseFormPayload};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::courses::{
    create_course as create_course_service, delete_course as delete_course_service,
    get_course as get_course_service, list_courses as list_courses_service,
    update_course as update_course_service,
};

#[get("/courses")]
pub async fn list_courses(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_courses_service(repo.get_ref()) {
        Ok(courses) => HttpResponse::Ok().json(courses),
        Err(err) => {
            log::error!("Failed to list courses: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/courses/{id}")]
pub async fn get_course(course_id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    // Non-positive ids cannot reference a stored course.
    let course_id = match CourseId::new(course_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().finish(),
    };

    match get_course_service(course_id, repo.get_ref()) {
        Ok(course) => HttpResponse::Ok().json(course),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to get course: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/courses")]
pub async fn create_course(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CourseForm>,
) -> impl Responder {
    let payload: CourseFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ErrorBody::bad_request(e.to_string())),
    };

    match create_course_service(payload, repo.get_ref()) {
        Ok(course) => {
            let location = format!("/api/courses/{}", course.id);
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(course)
        }
        Err(ServiceError::Validation(msg)) | Err(ServiceError::Form(msg)) => {
            HttpResponse::BadRequest().json(ErrorBody::bad_request(msg))
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to create course: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[put("/courses/{id}")]
pub async fn update_course(
    course_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CourseForm>,
) -> impl Responder {
    let course_id = course_id.into_inner();

    if form.id != Some(course_id) {
        return HttpResponse::BadRequest().json(ErrorBody::bad_request(
            "Course id in body does not match the path",
        ));
    }

    let payload: CourseFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().json(ErrorBody::bad_request(e.to_string())),
    };

    let course_id = match CourseId::new(course_id) {
        Ok(id) => id,
        Err(e) => return HttpResponse::BadRequest().json(ErrorBody::bad_request(e.to_string())),
    };

    match update_course_service(course_id, payload, repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::Validation(msg)) | Err(ServiceError::Form(msg)) => {
            HttpResponse::BadRequest().json(ErrorBody::bad_request(msg))
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Conflict) => {
            // A lost concurrent update is surfaced, not retried.
            log::error!("Concurrent modification lost for course {course_id}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => {
            log::error!("Failed to update course: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[delete("/courses/{id}")]
pub async fn delete_course(
    course_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let course_id = match CourseId::new(course_id.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::NotFound().finish(),
    };

    match delete_course_service(course_id, repo.get_ref()) {
        Ok(course) => HttpResponse::Ok().json(course),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to delete course: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

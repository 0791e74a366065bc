//! Actix handlers mapping service results to HTTP responses.

pub mod courses;

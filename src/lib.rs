//! Core library exports for the courses service.
//!
//! This crate exposes the domain, forms, models, repositories, routes and
//! service layers used by the courses HTTP API.

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

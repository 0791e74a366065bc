//! Deserializable HTTP payloads and their typed conversions.

pub mod courses;

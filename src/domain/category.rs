use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryDescription, CategoryId};

/// Fixed classification tag for courses.
///
/// Categories are seeded by migration and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub description: CategoryDescription,
}

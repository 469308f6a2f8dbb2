//! Child rows shared by the aggregate families.
//!
//! Responsibilities, achievements, project features and project metrics all
//! have the same shape (text plus a caller-chosen position), as do the
//! technology tags on experiences and projects.

use serde::{Deserialize, Serialize};

use crate::shared::validation::{required_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: i32,
    pub description: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewListEntry {
    pub description: String,
    #[serde(default)]
    pub order_index: i32,
}

impl NewListEntry {
    pub fn new(description: &str, order_index: i32) -> Self {
        Self {
            description: description.to_string(),
            order_index,
        }
    }

    pub fn validated(self, field: &'static str) -> Result<Self, ValidationError> {
        Ok(Self {
            description: required_text(field, &self.description)?,
            order_index: self.order_index,
        })
    }
}

/// Technology tag. Kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTechnology {
    pub name: String,
}

impl NewTechnology {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn validated(self, field: &'static str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text(field, &self.name)?,
        })
    }
}

/// Validates every element of a child collection.
pub fn validate_all<T>(
    items: Vec<T>,
    check: impl Fn(T) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    items.into_iter().map(check).collect()
}

/// Same as [`validate_all`] for a collection that may be absent from a patch.
pub fn validate_replacement<T>(
    items: Option<Vec<T>>,
    check: impl Fn(T) -> Result<T, ValidationError>,
) -> Result<Option<Vec<T>>, ValidationError> {
    items.map(|items| validate_all(items, check)).transpose()
}

/// Sort key for rows with a caller-chosen position: `order_index`, then id.
pub trait Positioned {
    fn position(&self) -> (i32, i32);
}

impl Positioned for ListEntry {
    fn position(&self) -> (i32, i32) {
        (self.order_index, self.id)
    }
}

pub fn sort_by_position<T: Positioned>(items: &mut [T]) {
    items.sort_by_key(Positioned::position);
}

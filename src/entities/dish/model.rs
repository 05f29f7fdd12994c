//! Dish entity model

use crate::core::resource::Resource;
use serde::{Deserialize, Serialize};

/// A dish on the menu
///
/// Dishes are created with a freshly generated identifier and mutated in
/// place via update; they are never deleted. Post-validation, `price` is
/// always a strictly positive integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl Resource for Dish {
    fn resource_label() -> &'static str {
        "Dish"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied dish fields, deserialized from the `data` object after
/// the guard chain has passed
///
/// A body-supplied `id` is handled by the id-match guard on the raw data and
/// ignored here.
#[derive(Debug, Deserialize)]
pub struct DishPayload {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl DishPayload {
    /// Build a new dish with a generated identifier
    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

//! A single board: a named, owned collection of canvas items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Item;

/// A named collection of items owned by one user.
///
/// Items are kept in insertion order, which the presentation layer uses as
/// z-order. No item outlives its board: removing a board discards its items
/// as a unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier, assigned at creation
    pub id: Uuid,
    /// Display label
    pub name: String,
    /// Identifier of the owning user
    pub owner_id: Uuid,
    /// Ordered item sequence
    pub items: Vec<Item>,
}

impl Board {
    /// Create an empty board owned by `owner_id`.
    pub fn new(name: impl Into<String>, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            owner_id,
            items: Vec::new(),
        }
    }

    pub fn get_item(&self, item_id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn get_item_mut(&mut self, item_id: Uuid) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Append an item and return its id.
    pub fn add_item(&mut self, item: Item) -> Uuid {
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Remove an item by id. Unknown ids leave the board unchanged.
    pub fn remove_item(&mut self, item_id: Uuid) {
        self.items.retain(|item| item.id != item_id);
    }
}

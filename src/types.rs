//! Core types for the moodboard canvas system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: canvas items and their content types.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_IMAGE_SIZE, DROP_SCATTER};
use crate::geometry::{Point, Size};

/// The content a canvas item displays.
///
/// Image content is an opaque reference (a URL or data URL produced by the
/// presentation layer's file ingestion) — this crate never parses or decodes
/// image bytes itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ItemContent {
    /// An image, referenced by URL or embedded data URL
    Image(String),
    /// Plain text content
    Text(String),
}

impl ItemContent {
    /// Size a freshly placed item starts with, where one applies.
    ///
    /// Text items flow with their rendered content and carry no size.
    pub fn default_size(&self) -> Option<Size> {
        match self {
            ItemContent::Image(_) => Some(DEFAULT_IMAGE_SIZE.into()),
            ItemContent::Text(_) => None,
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            ItemContent::Image(_) => "IMAGE",
            ItemContent::Text(_) => "TEXT",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ItemContent::Image(_))
    }
}

/// An item placed on a board.
///
/// Each item has a unique ID, a canvas-relative position, optional size, and
/// its content. Position is always defined once the item exists; size is
/// present for images that have been placed or resized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item
    pub id: Uuid,
    /// The content this item displays
    pub content: ItemContent,
    /// Position on the canvas in canvas units
    pub position: Point,
    /// Size of the item in canvas units, if it has one
    pub size: Option<Size>,
}

impl Item {
    /// Create an item at an explicit position with the content's default size.
    pub fn new(content: ItemContent, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            size: content.default_size(),
            content,
            position,
        }
    }

    /// Create an item at a randomized drop position.
    ///
    /// New drops are scattered within a `DROP_SCATTER`-sized square so that
    /// repeated drops do not stack at exactly the same spot.
    pub fn scattered(content: ItemContent) -> Self {
        let mut rng = rand::thread_rng();
        let position = Point::new(
            rng.gen_range(0.0..DROP_SCATTER),
            rng.gen_range(0.0..DROP_SCATTER),
        );
        Self::new(content, position)
    }

    pub fn display_name(&self) -> String {
        match &self.content {
            ItemContent::Image(reference) => reference.clone(),
            ItemContent::Text(text) => text.clone(),
        }
    }
}

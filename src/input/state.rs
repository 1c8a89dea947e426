//! Session state machine - unified state for a single item's interactions.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (pointer down on the item body, not a resize handle)
//! Idle -> Resizing    (pointer down on the south-east resize handle)
//!
//! Any -> Idle         (pointer up - finalizes the operation)
//! ```
//!
//! Drag and resize are mutually exclusive per item: entering one while the
//! other is active is rejected by the session driver.

use crate::geometry::{Point, Size};

/// Interaction state for one item instance.
///
/// Everything in here is transient, item-scoped session state that disappears
/// when the session ends; the store stays the single source of truth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SessionState {
    /// No active input operation
    #[default]
    Idle,

    /// Dragging the item
    Dragging {
        /// Offset from the item origin to the pointer at grab time
        grab_offset: Point,
        /// Transient position tracking the pointer, committed on release
        position: Point,
    },

    /// Resizing the item via its corner handle
    Resizing {
        /// Pointer position at the start of the resize
        start_pointer: Point,
        /// Item size at the start of the resize
        start_size: Size,
        /// Aspect ratio locked for the whole session
        aspect_ratio: f32,
    },
}

impl SessionState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if currently resizing
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start dragging from the item's current position
    pub fn start_dragging(&mut self, grab_offset: Point, position: Point) {
        *self = Self::Dragging {
            grab_offset,
            position,
        };
    }

    /// Start resizing, locking the aspect ratio for the session
    pub fn start_resizing(&mut self, start_pointer: Point, start_size: Size, aspect_ratio: f32) {
        *self = Self::Resizing {
            start_pointer,
            start_size,
            aspect_ratio,
        };
    }

    /// Get the transient drag position, if dragging
    pub fn dragged_position(&self) -> Option<Point> {
        match self {
            Self::Dragging { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Get the grab offset, if dragging
    pub fn grab_offset(&self) -> Option<Point> {
        match self {
            Self::Dragging { grab_offset, .. } => Some(*grab_offset),
            _ => None,
        }
    }

    /// Update the transient drag position
    pub fn update_dragged_position(&mut self, new_position: Point) {
        if let Self::Dragging { position, .. } = self {
            *position = new_position;
        }
    }

    /// Get the resize start parameters, if resizing
    pub fn resize_start(&self) -> Option<(Point, Size, f32)> {
        match self {
            Self::Resizing {
                start_pointer,
                start_size,
                aspect_ratio,
            } => Some((*start_pointer, *start_size, *aspect_ratio)),
            _ => None,
        }
    }
}

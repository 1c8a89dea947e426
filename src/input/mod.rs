//! Pointer input handling for canvas items.
//!
//! This module implements the interactive geometry engine: it translates raw
//! pointer input into committed position/size changes on exactly one item at
//! a time.
//!
//! ## Architecture
//!
//! The engine uses an explicit state machine (`SessionState`) to track the
//! current interaction mode. This replaces scattered boolean flags and makes
//! impossible states unrepresentable: a session is idle, dragging, or
//! resizing, never two at once.
//!
//! ## Modules
//!
//! - `state` - Session state machine enum and helper methods
//! - `session` - Per-item session driver (entry, pointer moves, commit)

mod session;
mod state;

pub use session::{ItemSession, ResizeCorner};
pub use state::SessionState;

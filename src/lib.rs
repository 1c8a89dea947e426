//! Moodboard core: board/item state store and interactive geometry engine.
//!
//! This crate owns the canonical collection of boards and their items
//! ([`store::BoardStore`]) and translates raw pointer input into committed
//! position/size changes ([`input::ItemSession`]). Everything visual —
//! rendering, file decoding, auth — lives in a presentation layer that calls
//! into this crate and is deliberately absent here.
//!
//! ## Architecture
//!
//! - `geometry` - Points, sizes, bounds clamping, aspect-ratio sanitizing
//! - `types` - Item and content types
//! - `board` - A single board owning its ordered item list
//! - `store` - The single source of truth: board CRUD and selection
//! - `input` - Per-item drag/resize session state machine

pub mod board;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod store;
pub mod types;

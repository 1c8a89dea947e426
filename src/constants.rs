//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Item Defaults
// ============================================================================

/// Default size for freshly dropped image items
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (250.0, 250.0);

/// Fallback size when resizing an item that was never given one
pub const FALLBACK_ITEM_SIZE: (f32, f32) = (200.0, 200.0);

/// Side length of the square area new items are scattered into
pub const DROP_SCATTER: f32 = 200.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Minimum item width for resize operations
pub const MIN_ITEM_WIDTH: f32 = 100.0;

/// Aspect ratio used until an image's natural dimensions are known
pub const DEFAULT_ASPECT_RATIO: f32 = 1.0;

//! Geometry primitives for canvas interactions.
//!
//! This module provides the small vocabulary of types the store and input
//! engine share: canvas-relative points, item sizes, and the parent-container
//! rectangle used for drag clamping. It also centralizes the numeric guards
//! for aspect ratios so they are not duplicated across input handling code.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ASPECT_RATIO;

/// A canvas-relative position in canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An item's extent in canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// The parent container's rectangle, supplied by the rendering surface.
///
/// The engine treats this as an opaque constraint; it never measures or
/// derives it itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Clamp an item origin so a `size`-sized item stays inside the bounds.
    ///
    /// When the item is larger than the container, the item is pinned to the
    /// container origin rather than inverted.
    pub fn clamp_origin(&self, position: Point, size: Size) -> Point {
        let max_x = (self.origin.x + self.size.width - size.width).max(self.origin.x);
        let max_y = (self.origin.y + self.size.height - size.height).max(self.origin.y);
        Point::new(
            position.x.clamp(self.origin.x, max_x),
            position.y.clamp(self.origin.y, max_y),
        )
    }
}

/// Aspect ratio from an image's natural dimensions, sanitized.
#[inline]
pub fn aspect_ratio(natural_width: f32, natural_height: f32) -> f32 {
    sanitize_aspect_ratio(natural_width / natural_height)
}

/// Replace zero, infinite, or undefined ratios with the default before use.
///
/// Height is always derived as `width / ratio`, so a degenerate ratio would
/// collapse or explode the item on the very first resize move.
#[inline]
pub fn sanitize_aspect_ratio(ratio: f32) -> f32 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        DEFAULT_ASPECT_RATIO
    }
}

//! Geometric primitives for ladder layout and click placement.
//!
//! This module provides the fundamental geometric types used throughout Amida
//! for describing click positions, rung endpoints and canvas dimensions.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Amida uses a coordinate system consistent with SVG and HTML canvases:
//!
//! ```text
//!   (0,0) ────────► +X   (layout axis: vertical lines are spread along X)
//!     │
//!     │
//!     │
//!     ▼
//!    +Y                   (rung axis: rungs are ordered top to bottom along Y)
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward, so a smaller `y` is higher on the ladder

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use amida_core::geometry::Point;
/// let click = Point::new(30.0, 120.0);
/// assert_eq!(click.x(), 30.0);
/// assert_eq!(click.y(), 120.0);
///
/// let moved = click.with_x(10.0);
/// assert_eq!(moved.x(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Returns `true` when both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents the dimensions of a canvas with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

//! Geometry and grid logic: points, bounds, snapping, and clamping.
//!
//! Everything in this module is a pure function over plain values. All
//! coordinates are surface-local logical units (CSS pixels); the device
//! pixel ratio is applied only at the rendering boundary.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::GRID_STEP;

/// A point in surface-local logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Logical dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `point` lies inside this box (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Whether this box overlaps the surface rectangle `[0,width) × [0,height)`
    /// with positive area on each axis. Touching an edge does not count.
    #[must_use]
    pub fn intersects_surface(&self, surface: Size) -> bool {
        self.x + self.width > 0.0
            && self.x < surface.width
            && self.y + self.height > 0.0
            && self.y < surface.height
    }
}

/// Round `value` to the nearest multiple of [`GRID_STEP`] when the grid is
/// enabled; identity otherwise.
#[must_use]
pub fn snap(value: f64, grid_enabled: bool) -> f64 {
    if grid_enabled {
        (value / GRID_STEP).round() * GRID_STEP
    } else {
        value
    }
}

/// Fit a bounding box onto the surface after a dimension swap.
///
/// Shifts the box left/up just enough that its right/bottom edges fit, then
/// clamps to non-negative coordinates (the top-left corner wins when the box
/// is larger than the surface). Returns the adjusted top-left position.
#[must_use]
pub fn clamp_into(bounds: Bounds, surface: Size) -> Point {
    let mut x = bounds.x;
    let mut y = bounds.y;
    if x + bounds.width > surface.width {
        x = surface.width - bounds.width;
    }
    if y + bounds.height > surface.height {
        y = surface.height - bounds.height;
    }
    Point::new(x.max(0.0), y.max(0.0))
}

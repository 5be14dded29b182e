//! Backing-buffer sizing for device pixel density.
//!
//! The canvas element has two sizes: the CSS layout size (logical units) and
//! the backing pixel buffer. Keeping the buffer at `css × devicePixelRatio`
//! and scaling the draw transform by the same ratio keeps logical-unit
//! coordinates consistent across pixel densities.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Pixel dimensions for the canvas backing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

/// Target backing-buffer size for a canvas displayed at `css_width` ×
/// `css_height` logical units on a display with the given pixel ratio.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> BackingSize {
    BackingSize {
        width: (css_width * dpr).floor().max(0.0) as u32,
        height: (css_height * dpr).floor().max(0.0) as u32,
    }
}

//! Shared numeric and color constants for the rod canvas.
//!
//! These are fixed product configuration, not tunables: the rod sizes and the
//! grid step define the arithmetic the widget teaches (a rod of value `n` is
//! exactly `n` base units long).

// ── Rod geometry ────────────────────────────────────────────────

/// Length of one unit of rod value, in logical (CSS pixel) units.
pub const BASE_UNIT: f64 = 40.0;

/// Cross-section of a horizontal rod, in logical units.
pub const ROD_HEIGHT: f64 = 40.0;

/// Corner radius of the rounded rod rectangle.
pub const ROD_CORNER_RADIUS: f64 = 4.0;

// ── Grid ────────────────────────────────────────────────────────

/// Smallest grid unit, in logical units.
pub const GRID_BASE: f64 = 5.0;

/// Visual multiplier: one visible grid square spans this many base units.
pub const GRID_VISUAL_MULT: f64 = 4.0;

/// Snapping step and visible grid spacing (`GRID_BASE` × `GRID_VISUAL_MULT`).
pub const GRID_STEP: f64 = GRID_BASE * GRID_VISUAL_MULT;

// ── Drawing styles ──────────────────────────────────────────────

/// Outline color for every rod.
pub const ROD_OUTLINE_COLOR: &str = "#4A5568";

/// Outline width for every rod, in logical units.
pub const ROD_OUTLINE_WIDTH: f64 = 2.0;

/// Grid line color.
pub const GRID_LINE_COLOR: &str = "rgba(0,0,0,0.08)";

/// Dash pattern for the selection highlight: on-length, off-length.
pub const SELECTION_DASH: [f64; 2] = [6.0, 4.0];

/// Selection highlight color.
pub const SELECTION_COLOR: &str = "#6366f1";

/// Outward inset of the selection highlight from the rod's bounds.
pub const SELECTION_MARGIN: f64 = 3.0;

/// Font for the numeric value label centered in each rod.
pub const VALUE_FONT: &str = "bold 16px system-ui";

//! The fixed catalog of rod specifications offered for placement.
//!
//! The catalog follows the standard Cuisenaire color scheme: ten rods with
//! values 1–10, each with a fill color, a contrasting label color, and a
//! display name. It is process-wide constant data and is never mutated.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::consts::{BASE_UNIT, ROD_HEIGHT};

/// Immutable description of one rod kind in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RodSpec {
    /// Integer value, 1–10, unique within the catalog.
    pub value: u32,
    /// Fill color as a CSS color string.
    pub color: &'static str,
    /// Label color chosen to contrast with `color`.
    pub text_color: &'static str,
    /// Display name shown in palette tooltips.
    pub name: &'static str,
}

impl RodSpec {
    /// Horizontal extent of a freshly placed rod: `value` base units.
    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.value) * BASE_UNIT
    }

    /// Vertical extent of a freshly placed rod.
    #[must_use]
    pub fn height(&self) -> f64 {
        ROD_HEIGHT
    }
}

/// The ten rod kinds, ordered by value.
pub const ROD_SPECS: [RodSpec; 10] = [
    RodSpec { value: 1, color: "#FFFFFF", text_color: "#333333", name: "Blanca" },
    RodSpec { value: 2, color: "#FF0000", text_color: "#FFFFFF", name: "Roja" },
    RodSpec { value: 3, color: "#90EE90", text_color: "#333333", name: "Verde Claro" },
    RodSpec { value: 4, color: "#FFC0CB", text_color: "#333333", name: "Rosa" },
    RodSpec { value: 5, color: "#FFFF00", text_color: "#333333", name: "Amarilla" },
    RodSpec { value: 6, color: "#008000", text_color: "#FFFFFF", name: "Verde Oscuro" },
    RodSpec { value: 7, color: "#000000", text_color: "#FFFFFF", name: "Negra" },
    RodSpec { value: 8, color: "#A52A2A", text_color: "#FFFFFF", name: "Marrón" },
    RodSpec { value: 9, color: "#0000FF", text_color: "#FFFFFF", name: "Azul" },
    RodSpec { value: 10, color: "#FFA500", text_color: "#FFFFFF", name: "Naranja" },
];

/// Look up the catalog entry for `value`, if it is a valid rod value.
#[must_use]
pub fn spec_for_value(value: u32) -> Option<&'static RodSpec> {
    ROD_SPECS.iter().find(|spec| spec.value == value)
}

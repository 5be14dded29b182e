//! Input model: the gesture state machine, keyboard commands, and display
//! flags.
//!
//! `InputState` is the router's coarse gesture state between pointer-down and
//! pointer-up; the gesture payload (ghost rod, drag offset) lives in the
//! scene. `Command` maps raw key names to the three keyboard actions, which
//! apply in any pointer state. `ViewState` is the persistent display state
//! visible to the renderer.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Gesture state tracked by the input router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A ghost rod from the palette is following the pointer.
    PlacingFromPalette,
    /// Pointer-down landed on a placed rod, which now follows the pointer.
    DraggingPlaced,
}

/// A keyboard action, decoded from a raw key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Remove the selected rod (`Delete` / `Backspace`).
    DeleteSelected,
    /// Swap the selected rod's orientation in place (`r` / `R`).
    RotateSelected,
    /// Ask the host to toggle fullscreen on the widget container (`f` / `F`).
    ToggleFullscreen,
}

/// Decode a browser key name into a [`Command`], if it is bound.
#[must_use]
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "Delete" | "Backspace" => Some(Command::DeleteSelected),
        "r" | "R" => Some(Command::RotateSelected),
        "f" | "F" => Some(Command::ToggleFullscreen),
        _ => None,
    }
}

/// Persistent display state visible to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    /// Draw the grid overlay and snap positions to it.
    pub show_grid: bool,
    /// Draw the numeric value label centered in each rod.
    pub show_values: bool,
    /// Mirrors the actual fullscreen status of the widget container.
    pub is_fullscreen: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { show_grid: true, show_values: true, is_fullscreen: false }
    }
}

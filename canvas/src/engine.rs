//! Top-level engine: event handlers, state transitions, and the canvas
//! binding.
//!
//! [`EngineCore`] holds all state and logic that does not depend on the
//! canvas element, so the full interaction state machine runs in native unit
//! tests. [`Engine`] wraps it together with the browser canvas, resizing the
//! backing buffer for device pixel density and invoking the renderer.
//!
//! Every state-changing handler returns an [`Action`] telling the host what
//! to do next; the host schedules exactly one redraw per `RenderNeeded`
//! before accepting further input.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::geom::{Point, Size};
use crate::input::{Command, InputState, ViewState, command_for_key};
use crate::palette::spec_for_value;
use crate::render;
use crate::scene::{Rod, RodId, Scene};
use crate::viewport;

/// What the host should do after an event has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed; no redraw needed.
    None,
    /// Committed state changed; schedule a redraw.
    RenderNeeded,
    /// The user asked to toggle fullscreen. The host owns the actual
    /// request/exit call; engine state follows the `fullscreenchange`
    /// notification, not this action.
    FullscreenToggleRequested,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without a browser.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub scene: Scene,
    pub view: ViewState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self { dpr: 1.0, ..Self::default() }
    }

    /// The logical surface rectangle used for commit and clamp decisions.
    #[must_use]
    pub fn surface(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    /// Update logical viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Pointer events ---

    /// Pointer-down on a palette swatch: create a ghost rod under the
    /// pointer and start tracking it. Ignored while another gesture is
    /// active or the value is not in the catalog.
    pub fn on_palette_pointer_down(&mut self, value: u32, pointer: Point) -> Action {
        if self.input != InputState::Idle {
            return Action::None;
        }
        let Some(spec) = spec_for_value(value) else {
            return Action::None;
        };
        self.scene.add_ghost_from_palette(spec, pointer);
        self.input = InputState::PlacingFromPalette;
        Action::RenderNeeded
    }

    /// Pointer-down on the surface: select and raise the hit rod and begin
    /// dragging it, or clear the selection when nothing was hit.
    pub fn on_pointer_down(&mut self, pointer: Point) -> Action {
        if self.input != InputState::Idle {
            return Action::None;
        }
        if let Some(id) = self.scene.hit_test(pointer) {
            self.scene.select_and_begin_drag(id, pointer);
            self.input = InputState::DraggingPlaced;
        } else {
            self.scene.clear_selection();
        }
        Action::RenderNeeded
    }

    /// Pointer-move anywhere in the viewport: the ghost or dragged rod
    /// tracks the pointer, snapped to the grid when enabled.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Action {
        match self.input {
            InputState::PlacingFromPalette => {
                self.scene.move_ghost(pointer, self.view.show_grid);
                Action::RenderNeeded
            }
            InputState::DraggingPlaced => {
                self.scene.drag_selected(pointer, self.view.show_grid);
                Action::RenderNeeded
            }
            InputState::Idle => Action::None,
        }
    }

    /// Pointer-up anywhere in the viewport: commit or discard the ghost, or
    /// end the active drag. Returns the router to `Idle`.
    pub fn on_pointer_up(&mut self) -> Action {
        match self.input {
            InputState::PlacingFromPalette => {
                self.scene.commit_ghost_or_discard(self.surface());
                self.input = InputState::Idle;
                Action::RenderNeeded
            }
            InputState::DraggingPlaced => {
                self.scene.end_drag();
                self.input = InputState::Idle;
                Action::RenderNeeded
            }
            InputState::Idle => Action::None,
        }
    }

    /// Double-click: remove the topmost rod under the pointer. This is a
    /// standalone action, valid in any gesture state.
    pub fn on_double_click(&mut self, pointer: Point) -> Action {
        if self.scene.remove_at(pointer).is_none() {
            return Action::None;
        }
        self.sync_after_removal();
        Action::RenderNeeded
    }

    // --- Keyboard ---

    /// Global keydown. Commands whose precondition is not met (no selection)
    /// are no-ops.
    pub fn on_key_down(&mut self, key: &str) -> Action {
        match command_for_key(key) {
            Some(Command::DeleteSelected) => {
                if self.scene.delete_selected() {
                    self.sync_after_removal();
                    Action::RenderNeeded
                } else {
                    Action::None
                }
            }
            Some(Command::RotateSelected) => {
                if self.scene.rotate_selected(self.surface(), self.view.show_grid) {
                    Action::RenderNeeded
                } else {
                    Action::None
                }
            }
            Some(Command::ToggleFullscreen) => Action::FullscreenToggleRequested,
            None => Action::None,
        }
    }

    // --- Display state ---

    /// Toggle the grid. Enabling it re-snaps every placed rod and the ghost
    /// so existing free-form positions align retroactively.
    pub fn set_show_grid(&mut self, show_grid: bool) -> Action {
        self.view.show_grid = show_grid;
        if show_grid {
            self.scene.resnap_all();
        }
        Action::RenderNeeded
    }

    /// Toggle the numeric value labels.
    pub fn set_show_values(&mut self, show_values: bool) -> Action {
        self.view.show_values = show_values;
        Action::RenderNeeded
    }

    /// Record the actual fullscreen status reported by the host. Exiting
    /// fullscreen clears the entire scene — a deliberate reset policy.
    pub fn set_fullscreen(&mut self, is_fullscreen: bool) -> Action {
        let was = self.view.is_fullscreen;
        self.view.is_fullscreen = is_fullscreen;
        if was && !is_fullscreen {
            self.scene.clear_all();
            self.input = InputState::Idle;
        }
        Action::RenderNeeded
    }

    /// Clear-all action from the host UI.
    pub fn clear_all(&mut self) -> Action {
        self.scene.clear_all();
        self.input = InputState::Idle;
        Action::RenderNeeded
    }

    // --- Queries ---

    /// Sum of all placed rod values.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.scene.total()
    }

    /// The currently selected rod id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<RodId> {
        self.scene.selected_id()
    }

    /// Look up a placed rod by id.
    #[must_use]
    pub fn rod(&self, id: RodId) -> Option<&Rod> {
        self.scene.rod(id)
    }

    /// A removal may have ended the drag the router was tracking.
    fn sync_after_removal(&mut self) {
        if self.input == InputState::DraggingPlaced && !self.scene.is_dragging() {
            self.input = InputState::Idle;
        }
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Resize the backing pixel buffer to the canvas's displayed size scaled
    /// by the device pixel ratio, and record the logical viewport.
    ///
    /// Safe to call on every container resize; the buffer is only touched
    /// when the target size actually changed.
    pub fn sync_viewport(&mut self) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        let css_w = f64::from(self.canvas.client_width());
        let css_h = f64::from(self.canvas.client_height());
        let backing = viewport::backing_size(css_w, css_h, dpr);
        if self.canvas.width() != backing.width {
            self.canvas.set_width(backing.width);
        }
        if self.canvas.height() != backing.height {
            self.canvas.set_height(backing.height);
        }
        self.core.set_viewport(css_w, css_h, dpr);
    }

    /// Draw the current state to the canvas.
    ///
    /// No-ops safely when the 2D context is unavailable (e.g. a stale event
    /// after unmount).
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(ctx) = self.context_2d() else {
            return Ok(());
        };
        render::draw(
            &ctx,
            &self.core.scene,
            self.core.view,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    fn context_2d(&self) -> Option<web_sys::CanvasRenderingContext2d> {
        let ctx = self.canvas.get_context("2d").unwrap_or(None)?;
        ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().map_or(None, Some)
    }

    // --- Delegated event handlers ---

    pub fn on_palette_pointer_down(&mut self, value: u32, pointer: Point) -> Action {
        self.core.on_palette_pointer_down(value, pointer)
    }

    pub fn on_pointer_down(&mut self, pointer: Point) -> Action {
        self.core.on_pointer_down(pointer)
    }

    pub fn on_pointer_move(&mut self, pointer: Point) -> Action {
        self.core.on_pointer_move(pointer)
    }

    pub fn on_pointer_up(&mut self) -> Action {
        self.core.on_pointer_up()
    }

    pub fn on_double_click(&mut self, pointer: Point) -> Action {
        self.core.on_double_click(pointer)
    }

    pub fn on_key_down(&mut self, key: &str) -> Action {
        self.core.on_key_down(key)
    }

    pub fn set_show_grid(&mut self, show_grid: bool) -> Action {
        self.core.set_show_grid(show_grid)
    }

    pub fn set_show_values(&mut self, show_values: bool) -> Action {
        self.core.set_show_values(show_values)
    }

    pub fn set_fullscreen(&mut self, is_fullscreen: bool) -> Action {
        self.core.set_fullscreen(is_fullscreen)
    }

    pub fn clear_all(&mut self) -> Action {
        self.core.clear_all()
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn total(&self) -> u32 {
        self.core.total()
    }

    #[must_use]
    pub fn selection(&self) -> Option<RodId> {
        self.core.selection()
    }

    /// Convert viewport-relative client coordinates to surface-local logical
    /// units using the canvas's current bounding rect.
    #[must_use]
    pub fn to_surface(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(client_x - rect.left(), client_y - rect.top())
    }
}

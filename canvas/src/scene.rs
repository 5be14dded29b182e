//! Scene model: placed rods, the ghost rod, selection, and z-order.
//!
//! The scene owns an ordered sequence of placed rods; the sequence order IS
//! the z-order (last = topmost, most recently interacted). At most one ghost
//! rod — a rod being dragged in from the palette — exists at a time, and it
//! is not part of the placed sequence until committed. `selected_id` is a
//! weak reference: every removal path clears it in the same operation when
//! the referenced rod goes away.
//!
//! Mutations flow in from the input router ([`crate::engine::EngineCore`]);
//! the renderer reads `placed`/`ghost`/`selected_id` to draw.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::geom::{self, Bounds, Point, Size};
use crate::palette::RodSpec;

/// Unique identifier for a placed or ghost rod.
///
/// Assigned from a single monotonically increasing counter for the scene's
/// lifetime, so an id never refers to two different rods.
pub type RodId = u32;

/// Which way a rod's long side runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A rod instance on (or being dragged onto) the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Rod {
    /// Unique identifier among all currently live rods.
    pub id: RodId,
    /// The rod's integer value, 1–10.
    pub value: u32,
    /// Fill color, copied from the palette spec.
    pub color: &'static str,
    /// Label color, copied from the palette spec.
    pub text_color: &'static str,
    /// Left edge in surface-local logical units. May be negative while the
    /// rod is being dragged.
    pub x: f64,
    /// Top edge in surface-local logical units.
    pub y: f64,
    /// Current width; `value × BASE_UNIT` when horizontal, `ROD_HEIGHT` when
    /// vertical.
    pub width: f64,
    /// Current height; swapped with `width` on rotation.
    pub height: f64,
    /// Which way the long side runs.
    pub orientation: Orientation,
}

impl Rod {
    /// The rod's axis-aligned bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

/// Active drag tracking: which rod follows the pointer and at what offset.
#[derive(Debug, Clone, Copy)]
struct DragState {
    id: RodId,
    /// Pointer position minus the rod's top-left at drag start, so the rod
    /// does not jump under the pointer.
    offset: Point,
}

/// The ordered scene of placed rods plus transient interaction state.
#[derive(Debug, Default)]
pub struct Scene {
    placed: Vec<Rod>,
    ghost: Option<Rod>,
    selected_id: Option<RodId>,
    drag: Option<DragState>,
    next_id: RodId,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> RodId {
        self.next_id += 1;
        self.next_id
    }

    // --- Ghost lifecycle ---

    /// Create a new ghost rod from a palette spec, centered at `pointer`.
    ///
    /// The ghost is horizontal, gets a fresh unique id, and is not added to
    /// the placed sequence. A previous uncommitted ghost is replaced.
    pub fn add_ghost_from_palette(&mut self, spec: &RodSpec, pointer: Point) -> RodId {
        let id = self.fresh_id();
        let width = spec.width();
        let height = spec.height();
        self.ghost = Some(Rod {
            id,
            value: spec.value,
            color: spec.color,
            text_color: spec.text_color,
            x: pointer.x - width / 2.0,
            y: pointer.y - height / 2.0,
            width,
            height,
            orientation: Orientation::Horizontal,
        });
        id
    }

    /// Reposition the ghost so its center tracks `pointer`, applying snap.
    pub fn move_ghost(&mut self, pointer: Point, grid_enabled: bool) {
        if let Some(ghost) = self.ghost.as_mut() {
            ghost.x = geom::snap(pointer.x - ghost.width / 2.0, grid_enabled);
            ghost.y = geom::snap(pointer.y - ghost.height / 2.0, grid_enabled);
        }
    }

    /// Commit the ghost into the placed sequence if its bounds intersect the
    /// surface; discard it silently otherwise. Returns whether it committed.
    ///
    /// A committed rod becomes topmost and selected.
    pub fn commit_ghost_or_discard(&mut self, surface: Size) -> bool {
        let Some(ghost) = self.ghost.take() else {
            return false;
        };
        if !ghost.bounds().intersects_surface(surface) {
            return false;
        }
        self.selected_id = Some(ghost.id);
        self.placed.push(ghost);
        true
    }

    // --- Hit testing / selection / drag ---

    /// The topmost placed rod whose bounding box contains `point`, if any.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<RodId> {
        self.placed
            .iter()
            .rev()
            .find(|rod| rod.bounds().contains(point))
            .map(|rod| rod.id)
    }

    /// Select `id`, raise it to the top of the z-order, and begin tracking a
    /// drag with the pointer offset recorded relative to the rod's origin.
    ///
    /// Returns `false` (and changes nothing) if `id` is not placed.
    pub fn select_and_begin_drag(&mut self, id: RodId, pointer: Point) -> bool {
        let Some(index) = self.placed.iter().position(|rod| rod.id == id) else {
            return false;
        };
        let rod = self.placed.remove(index);
        let offset = Point::new(pointer.x - rod.x, pointer.y - rod.y);
        self.placed.push(rod);
        self.selected_id = Some(id);
        self.drag = Some(DragState { id, offset });
        true
    }

    /// Move the dragged rod so `(x, y) = pointer - recorded offset`, snapped.
    /// No-op when no drag is active.
    pub fn drag_selected(&mut self, pointer: Point, grid_enabled: bool) {
        let Some(drag) = self.drag else {
            return;
        };
        if let Some(rod) = self.placed.iter_mut().find(|rod| rod.id == drag.id) {
            rod.x = geom::snap(pointer.x - drag.offset.x, grid_enabled);
            rod.y = geom::snap(pointer.y - drag.offset.y, grid_enabled);
        }
    }

    /// Stop tracking the active drag; the rod stays where it is.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Whether a drag is currently being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drop the selection without touching any rod.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    // --- Removal / mutation ---

    /// Remove the topmost rod whose bounds contain `point`, returning its id.
    ///
    /// Clears the selection and any active drag if they referenced the
    /// removed rod.
    pub fn remove_at(&mut self, point: Point) -> Option<RodId> {
        let index = self.placed.iter().rposition(|rod| rod.bounds().contains(point))?;
        let removed = self.placed.remove(index);
        self.forget(removed.id);
        Some(removed.id)
    }

    /// Remove the selected rod, if any. Clears the selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected_id else {
            return false;
        };
        let Some(index) = self.placed.iter().position(|rod| rod.id == id) else {
            // Dangling reference; drop it.
            self.selected_id = None;
            return false;
        };
        self.placed.remove(index);
        self.forget(id);
        true
    }

    /// Rotate the selected rod in place: swap width/height and orientation,
    /// shift back onto the surface if the swap pushed it past the right or
    /// bottom edge, and re-snap when the grid is on.
    pub fn rotate_selected(&mut self, surface: Size, grid_enabled: bool) -> bool {
        let Some(id) = self.selected_id else {
            return false;
        };
        let Some(rod) = self.placed.iter_mut().find(|rod| rod.id == id) else {
            return false;
        };
        std::mem::swap(&mut rod.width, &mut rod.height);
        rod.orientation = match rod.orientation {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        };
        let clamped = geom::clamp_into(rod.bounds(), surface);
        rod.x = geom::snap(clamped.x, grid_enabled);
        rod.y = geom::snap(clamped.y, grid_enabled);
        true
    }

    /// Empty the placed sequence and drop the ghost, selection, and drag.
    pub fn clear_all(&mut self) {
        self.placed.clear();
        self.ghost = None;
        self.selected_id = None;
        self.drag = None;
    }

    /// Re-apply snapping to every placed rod and the ghost. Used when the
    /// grid is toggled on so free-form positions align retroactively.
    pub fn resnap_all(&mut self) {
        for rod in &mut self.placed {
            rod.x = geom::snap(rod.x, true);
            rod.y = geom::snap(rod.y, true);
        }
        if let Some(ghost) = self.ghost.as_mut() {
            ghost.x = geom::snap(ghost.x, true);
            ghost.y = geom::snap(ghost.y, true);
        }
    }

    // --- Queries ---

    /// Sum of the values of all placed rods. The ghost is excluded.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.placed.iter().map(|rod| rod.value).sum()
    }

    /// The placed rods in z-order (first = bottommost, last = topmost).
    #[must_use]
    pub fn placed(&self) -> &[Rod] {
        &self.placed
    }

    /// The uncommitted ghost rod, if one is being dragged in.
    #[must_use]
    pub fn ghost(&self) -> Option<&Rod> {
        self.ghost.as_ref()
    }

    /// The id of the selected rod, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<RodId> {
        self.selected_id
    }

    /// Look up a placed rod by id.
    #[must_use]
    pub fn rod(&self, id: RodId) -> Option<&Rod> {
        self.placed.iter().find(|rod| rod.id == id)
    }

    /// Number of placed rods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Whether no rods are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Forget any weak references to `id` after it has been removed.
    fn forget(&mut self, id: RodId) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        if self.drag.is_some_and(|drag| drag.id == id) {
            self.drag = None;
        }
    }
}

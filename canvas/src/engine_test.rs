#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn engine() -> EngineCore {
    let mut core = EngineCore::new();
    core.set_viewport(800.0, 600.0, 1.0);
    core
}

/// Drive a full palette-drag gesture: press on the swatch, drop at `(x, y)`.
fn drop_rod(core: &mut EngineCore, value: u32, x: f64, y: f64) -> Option<RodId> {
    core.on_palette_pointer_down(value, pt(x, y));
    core.on_pointer_move(pt(x, y));
    core.on_pointer_up();
    core.selection()
}

// =============================================================
// Palette placement flow
// =============================================================

#[test]
fn new_engine_is_idle_and_empty() {
    let core = engine();
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(core.total(), 0);
    assert!(core.selection().is_none());
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn palette_press_starts_placing() {
    let mut core = engine();
    let action = core.on_palette_pointer_down(3, pt(100.0, 100.0));
    assert_eq!(action, Action::RenderNeeded);
    assert_eq!(core.input, InputState::PlacingFromPalette);
    assert!(core.scene.ghost().is_some());
    assert_eq!(core.total(), 0);
}

#[test]
fn palette_press_with_bad_value_is_ignored() {
    let mut core = engine();
    assert_eq!(core.on_palette_pointer_down(0, pt(100.0, 100.0)), Action::None);
    assert_eq!(core.on_palette_pointer_down(11, pt(100.0, 100.0)), Action::None);
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn palette_press_during_gesture_is_ignored() {
    let mut core = engine();
    core.on_palette_pointer_down(3, pt(100.0, 100.0));
    assert_eq!(core.on_palette_pointer_down(5, pt(200.0, 200.0)), Action::None);
    assert_eq!(core.input, InputState::PlacingFromPalette);
    assert_eq!(core.scene.ghost().unwrap().value, 3);
}

#[test]
fn drop_on_surface_places_and_selects() {
    let mut core = engine();
    let id = drop_rod(&mut core, 5, 400.0, 300.0);
    assert!(id.is_some());
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(core.total(), 5);
    assert!(core.scene.ghost().is_none());
}

#[test]
fn drop_off_surface_discards_without_trace() {
    let mut core = engine();
    core.on_palette_pointer_down(5, pt(400.0, 300.0));
    core.on_pointer_move(pt(-2000.0, 300.0));
    let action = core.on_pointer_up();
    assert_eq!(action, Action::RenderNeeded);
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(core.total(), 0);
    assert!(core.selection().is_none());
    assert!(core.scene.is_empty());
}

// =============================================================
// Surface pointer flow
// =============================================================

#[test]
fn pointer_down_on_rod_starts_drag() {
    let mut core = engine();
    let id = drop_rod(&mut core, 3, 200.0, 100.0).unwrap();
    let action = core.on_pointer_down(pt(200.0, 100.0));
    assert_eq!(action, Action::RenderNeeded);
    assert_eq!(core.input, InputState::DraggingPlaced);
    assert_eq!(core.selection(), Some(id));
}

#[test]
fn pointer_down_on_empty_space_clears_selection() {
    let mut core = engine();
    drop_rod(&mut core, 3, 200.0, 100.0);
    assert!(core.selection().is_some());
    let action = core.on_pointer_down(pt(700.0, 500.0));
    assert_eq!(action, Action::RenderNeeded);
    assert_eq!(core.input, InputState::Idle);
    assert!(core.selection().is_none());
}

#[test]
fn pointer_move_while_idle_is_noop() {
    let mut core = engine();
    drop_rod(&mut core, 3, 200.0, 100.0);
    assert_eq!(core.on_pointer_move(pt(500.0, 500.0)), Action::None);
}

#[test]
fn pointer_up_while_idle_is_noop() {
    let mut core = engine();
    assert_eq!(core.on_pointer_up(), Action::None);
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn drag_moves_rod_and_release_returns_to_idle() {
    let mut core = engine();
    core.set_show_grid(false);
    let id = drop_rod(&mut core, 3, 200.0, 100.0).unwrap();
    let rod = core.rod(id).unwrap();
    let (x0, y0) = (rod.x, rod.y);
    core.on_pointer_down(pt(x0, y0));
    core.on_pointer_move(pt(x0 + 50.0, y0 + 30.0));
    core.on_pointer_up();
    assert_eq!(core.input, InputState::Idle);
    let rod = core.rod(id).unwrap();
    assert_eq!(rod.x, x0 + 50.0);
    assert_eq!(rod.y, y0 + 30.0);
    assert_eq!(core.selection(), Some(id));
}

#[test]
fn dragging_rod_snaps_to_grid() {
    let mut core = engine();
    let id = drop_rod(&mut core, 3, 200.0, 100.0).unwrap();
    let rod = core.rod(id).unwrap();
    let (x0, y0) = (rod.x, rod.y);
    // Grab the exact corner so the top-left follows the pointer.
    core.on_pointer_down(pt(x0, y0));
    core.on_pointer_move(pt(53.0, 41.0));
    core.on_pointer_up();
    // Grid step is 20 logical units: 53 → 60, 41 → 40.
    let rod = core.rod(id).unwrap();
    assert_eq!(rod.x, 60.0);
    assert_eq!(rod.y, 40.0);
}

// =============================================================
// Double-click removal
// =============================================================

#[test]
fn double_click_removes_topmost_only() {
    let mut core = engine();
    let below = drop_rod(&mut core, 3, 200.0, 100.0).unwrap();
    drop_rod(&mut core, 7, 200.0, 100.0).unwrap();
    assert_eq!(core.total(), 10);
    let action = core.on_double_click(pt(200.0, 100.0));
    assert_eq!(action, Action::RenderNeeded);
    assert_eq!(core.total(), 3);
    assert!(core.rod(below).is_some());
}

#[test]
fn double_click_on_empty_space_is_noop() {
    let mut core = engine();
    drop_rod(&mut core, 3, 200.0, 100.0);
    assert_eq!(core.on_double_click(pt(700.0, 500.0)), Action::None);
    assert_eq!(core.total(), 3);
}

#[test]
fn double_click_removing_dragged_rod_ends_gesture() {
    let mut core = engine();
    drop_rod(&mut core, 3, 200.0, 100.0);
    core.on_pointer_down(pt(200.0, 100.0));
    assert_eq!(core.input, InputState::DraggingPlaced);
    core.on_double_click(pt(200.0, 100.0));
    assert_eq!(core.input, InputState::Idle);
    assert!(!core.scene.is_dragging());
    assert!(core.scene.is_empty());
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn delete_key_removes_selection() {
    let mut core = engine();
    drop_rod(&mut core, 5, 200.0, 100.0);
    assert_eq!(core.on_key_down("Delete"), Action::RenderNeeded);
    assert_eq!(core.total(), 0);
    assert!(core.selection().is_none());
}

#[test]
fn second_delete_is_noop() {
    let mut core = engine();
    drop_rod(&mut core, 5, 200.0, 100.0);
    core.on_key_down("Backspace");
    assert_eq!(core.on_key_down("Backspace"), Action::None);
}

#[test]
fn delete_without_selection_is_noop() {
    let mut core = engine();
    drop_rod(&mut core, 5, 200.0, 100.0);
    core.on_pointer_down(pt(700.0, 500.0)); // click empty space
    core.on_pointer_up();
    assert_eq!(core.on_key_down("Delete"), Action::None);
    assert_eq!(core.total(), 5);
}

#[test]
fn rotate_key_twice_restores_rod() {
    let mut core = engine();
    let id = drop_rod(&mut core, 4, 300.0, 300.0).unwrap();
    let before = core.rod(id).unwrap().clone();
    assert_eq!(core.on_key_down("r"), Action::RenderNeeded);
    let rotated = core.rod(id).unwrap();
    assert_eq!(rotated.width, before.height);
    assert_eq!(rotated.height, before.width);
    assert_eq!(core.on_key_down("R"), Action::RenderNeeded);
    let after = core.rod(id).unwrap();
    assert_eq!(after.width, before.width);
    assert_eq!(after.height, before.height);
    assert_eq!(after.orientation, before.orientation);
}

#[test]
fn rotate_without_selection_is_noop() {
    let mut core = engine();
    assert_eq!(core.on_key_down("r"), Action::None);
}

#[test]
fn fullscreen_key_only_requests_toggle() {
    let mut core = engine();
    drop_rod(&mut core, 5, 200.0, 100.0);
    assert_eq!(core.on_key_down("f"), Action::FullscreenToggleRequested);
    // State is untouched until the host reports the actual change.
    assert!(!core.view.is_fullscreen);
    assert_eq!(core.total(), 5);
}

#[test]
fn unbound_key_is_noop() {
    let mut core = engine();
    drop_rod(&mut core, 5, 200.0, 100.0);
    assert_eq!(core.on_key_down("Escape"), Action::None);
    assert_eq!(core.total(), 5);
}

// =============================================================
// Display state
// =============================================================

#[test]
fn enabling_grid_resnaps_existing_rods() {
    let mut core = engine();
    core.set_show_grid(false);
    let id = drop_rod(&mut core, 3, 203.0, 97.0).unwrap();
    let rod = core.rod(id).unwrap();
    assert_ne!(rod.x % 20.0, 0.0);
    assert_eq!(core.set_show_grid(true), Action::RenderNeeded);
    let rod = core.rod(id).unwrap();
    assert_eq!(rod.x % 20.0, 0.0);
    assert_eq!(rod.y % 20.0, 0.0);
}

#[test]
fn disabling_grid_leaves_positions_alone() {
    let mut core = engine();
    let id = drop_rod(&mut core, 3, 200.0, 100.0).unwrap();
    let before = core.rod(id).unwrap().clone();
    core.set_show_grid(false);
    assert_eq!(*core.rod(id).unwrap(), before);
}

#[test]
fn toggling_values_only_touches_view() {
    let mut core = engine();
    drop_rod(&mut core, 3, 200.0, 100.0);
    assert_eq!(core.set_show_values(false), Action::RenderNeeded);
    assert!(!core.view.show_values);
    assert_eq!(core.total(), 3);
}

// =============================================================
// Fullscreen lifecycle
// =============================================================

#[test]
fn entering_fullscreen_preserves_scene() {
    let mut core = engine();
    drop_rod(&mut core, 5, 200.0, 100.0);
    assert_eq!(core.set_fullscreen(true), Action::RenderNeeded);
    assert!(core.view.is_fullscreen);
    assert_eq!(core.total(), 5);
}

#[test]
fn exiting_fullscreen_always_clears_scene() {
    let mut core = engine();
    core.set_fullscreen(true);
    drop_rod(&mut core, 5, 200.0, 100.0);
    drop_rod(&mut core, 7, 400.0, 300.0);
    assert_eq!(core.set_fullscreen(false), Action::RenderNeeded);
    assert_eq!(core.total(), 0);
    assert!(core.scene.is_empty());
    assert!(core.selection().is_none());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn exit_notification_while_not_fullscreen_keeps_scene() {
    let mut core = engine();
    drop_rod(&mut core, 5, 200.0, 100.0);
    core.set_fullscreen(false);
    assert_eq!(core.total(), 5);
}

#[test]
fn exiting_fullscreen_aborts_active_gesture() {
    let mut core = engine();
    core.set_fullscreen(true);
    core.on_palette_pointer_down(3, pt(100.0, 100.0));
    core.set_fullscreen(false);
    assert_eq!(core.input, InputState::Idle);
    assert!(core.scene.ghost().is_none());
}

// =============================================================
// Clear and totals
// =============================================================

#[test]
fn clear_all_resets_scene_and_gesture() {
    let mut core = engine();
    drop_rod(&mut core, 5, 200.0, 100.0);
    core.on_pointer_down(pt(200.0, 100.0));
    assert_eq!(core.clear_all(), Action::RenderNeeded);
    assert_eq!(core.total(), 0);
    assert_eq!(core.input, InputState::Idle);
    assert!(core.selection().is_none());
}

#[test]
fn total_is_sum_of_placed_values() {
    let mut core = engine();
    drop_rod(&mut core, 3, 100.0, 100.0);
    drop_rod(&mut core, 7, 300.0, 100.0);
    drop_rod(&mut core, 10, 500.0, 300.0);
    assert_eq!(core.total(), 20);
    core.on_double_click(pt(500.0, 300.0));
    assert_eq!(core.total(), 10);
}

#[test]
fn overlap_then_remove_scenario() {
    // Place a 3-rod, stack a 7-rod on it, remove the 7 with a double-click.
    let mut core = engine();
    drop_rod(&mut core, 3, 200.0, 100.0);
    drop_rod(&mut core, 7, 200.0, 100.0);
    core.on_double_click(pt(200.0, 100.0));
    assert_eq!(core.total(), 3);
    assert_eq!(core.scene.placed().len(), 1);
    assert_eq!(core.scene.placed()[0].value, 3);
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn set_viewport_updates_surface() {
    let mut core = engine();
    core.set_viewport(1920.0, 1080.0, 2.0);
    let surface = core.surface();
    assert_eq!(surface.width, 1920.0);
    assert_eq!(surface.height, 1080.0);
    assert_eq!(core.dpr, 2.0);
}

#[test]
fn shrinking_viewport_affects_future_commits_only() {
    let mut core = engine();
    drop_rod(&mut core, 5, 700.0, 500.0);
    core.set_viewport(400.0, 300.0, 1.0);
    // The placed rod stays where it is; a new drop outside the smaller
    // surface is discarded.
    assert_eq!(core.total(), 5);
    core.on_palette_pointer_down(3, pt(700.0, 500.0));
    core.on_pointer_up();
    assert_eq!(core.total(), 5);
}

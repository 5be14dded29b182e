//! Rendering: draws the rod scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of
//! scene and display state and produces pixels — it does not mutate any
//! application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    GRID_LINE_COLOR, GRID_STEP, ROD_CORNER_RADIUS, ROD_OUTLINE_COLOR, ROD_OUTLINE_WIDTH,
    SELECTION_COLOR, SELECTION_DASH, SELECTION_MARGIN, VALUE_FONT,
};
use crate::input::ViewState;
use crate::scene::{Rod, Scene};

/// Draw the full scene: grid, placed rods in z-order, ghost, selection.
///
/// `viewport_w` and `viewport_h` are in logical (CSS pixel) units; `dpr` is
/// the device pixel ratio applied once to the base transform so all drawing
/// below happens in logical units.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    view: ViewState,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear and set up the density transform.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    // Layer 2: grid overlay.
    if view.show_grid {
        draw_grid(ctx, viewport_w, viewport_h);
    }

    // Layer 3: rods in z-order (bottom first), ghost on top.
    for rod in scene.placed() {
        draw_rod(ctx, rod, view.show_values)?;
    }
    if let Some(ghost) = scene.ghost() {
        draw_rod(ctx, ghost, view.show_values)?;
    }

    // Layer 4: selection highlight.
    if let Some(id) = scene.selected_id() {
        if let Some(rod) = scene.rod(id) {
            draw_selection(ctx, rod)?;
        }
    }

    Ok(())
}

/// Uniform grid of horizontal and vertical lines at the snapping step.
///
/// Lines sit on half-pixel offsets so a 1-unit stroke stays crisp.
fn draw_grid(ctx: &CanvasRenderingContext2d, viewport_w: f64, viewport_h: f64) {
    ctx.save();
    ctx.set_stroke_style_str(GRID_LINE_COLOR);
    ctx.set_line_width(1.0);

    let mut x = 0.0;
    while x <= viewport_w {
        ctx.begin_path();
        ctx.move_to(x + 0.5, 0.0);
        ctx.line_to(x + 0.5, viewport_h);
        ctx.stroke();
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y <= viewport_h {
        ctx.begin_path();
        ctx.move_to(0.0, y + 0.5);
        ctx.line_to(viewport_w, y + 0.5);
        ctx.stroke();
        y += GRID_STEP;
    }

    ctx.restore();
}

fn draw_rod(ctx: &CanvasRenderingContext2d, rod: &Rod, show_values: bool) -> Result<(), JsValue> {
    ctx.set_fill_style_str(rod.color);
    ctx.set_stroke_style_str(ROD_OUTLINE_COLOR);
    ctx.set_line_width(ROD_OUTLINE_WIDTH);

    rounded_rect_path(ctx, rod.x, rod.y, rod.width, rod.height, ROD_CORNER_RADIUS)?;
    ctx.fill();
    ctx.stroke();

    if show_values {
        ctx.set_fill_style_str(rod.text_color);
        ctx.set_font(VALUE_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(
            &rod.value.to_string(),
            rod.x + rod.width / 2.0,
            rod.y + rod.height / 2.0,
        )?;
    }
    Ok(())
}

/// Dashed highlight outline, inset outward from the rod's bounds.
fn draw_selection(ctx: &CanvasRenderingContext2d, rod: &Rod) -> Result<(), JsValue> {
    ctx.save();
    let dash = js_sys::Array::new();
    dash.push(&SELECTION_DASH[0].into());
    dash.push(&SELECTION_DASH[1].into());
    ctx.set_line_dash(&dash)?;
    ctx.set_line_width(ROD_OUTLINE_WIDTH);
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.stroke_rect(
        rod.x - SELECTION_MARGIN,
        rod.y - SELECTION_MARGIN,
        rod.width + SELECTION_MARGIN * 2.0,
        rod.height + SELECTION_MARGIN * 2.0,
    );
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

/// Trace a rounded-rectangle path on the context.
fn rounded_rect_path(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) -> Result<(), JsValue> {
    let r = radius.min(width / 2.0).min(height / 2.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + width, y, x + width, y + height, r)?;
    ctx.arc_to(x + width, y + height, x, y + height, r)?;
    ctx.arc_to(x, y + height, x, y, r)?;
    ctx.arc_to(x, y, x + width, y, r)?;
    ctx.close_path();
    Ok(())
}

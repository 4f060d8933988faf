//! Rendering: draws the slice set to a 2D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only slice set
//! and produces pixels; it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller (the canvas host component) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{LABEL_FONT_PX, LABEL_INSET_PX};
use crate::geometry::Slice;

/// Stroke color for slice borders and the empty-wheel outline.
const BORDER_COLOR: &str = "#1F1A17";

/// Label text color.
const LABEL_COLOR: &str = "#fff";

/// Draw the full wheel: every slice, then every label on top.
///
/// `size` is the width and height of the square canvas in CSS pixels. The
/// surface is cleared and fully redrawn on every call; there is no
/// incremental diffing.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, slices: &[Slice], size: f64) -> Result<(), JsValue> {
    let radius = size / 2.0;
    ctx.clear_rect(0.0, 0.0, size, size);

    if slices.is_empty() {
        return draw_empty(ctx, radius);
    }

    for slice in slices {
        draw_slice(ctx, slice, radius)?;
    }
    for slice in slices {
        draw_label(ctx, slice, radius)?;
    }
    Ok(())
}

/// Outline of an empty wheel.
fn draw_empty(ctx: &CanvasRenderingContext2d, radius: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(radius, radius, radius - 1.0, 0.0, std::f64::consts::TAU)?;
    ctx.set_stroke_style_str(BORDER_COLOR);
    ctx.stroke();
    Ok(())
}

/// Filled circular sector from the wheel center, with a border.
fn draw_slice(ctx: &CanvasRenderingContext2d, slice: &Slice, radius: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.move_to(radius, radius);
    ctx.arc(
        radius,
        radius,
        radius,
        slice.start_deg.to_radians(),
        slice.end_deg.to_radians(),
    )?;
    ctx.close_path();

    ctx.set_fill_style_str(slice.color);
    ctx.fill();

    ctx.set_stroke_style_str(BORDER_COLOR);
    ctx.stroke();
    Ok(())
}

/// Label at the slice's angular midpoint, rotated radially outward and
/// right-aligned near the rim. Long labels may overflow their slice.
fn draw_label(ctx: &CanvasRenderingContext2d, slice: &Slice, radius: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(radius, radius)?;
    ctx.rotate(slice.mid_deg().to_radians())?;

    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_font(&format!("{LABEL_FONT_PX:.0}px sans-serif"));
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&slice.label, radius - LABEL_INSET_PX, 0.0)?;

    ctx.restore();
    Ok(())
}

//! Bridge component between the Leptos UI and the imperative wheel renderer.
//!
//! Mounts the `<canvas>`, redraws through `wheel::render` whenever the wheel
//! state changes, and owns the spin gesture: clicking the disc starts a
//! spin, a CSS transition on the disc wrapper animates toward the new
//! cumulative rotation, and a fixed timeout reveals the result afterward.
//! A reveal whose spin was superseded in the meantime is dropped by the
//! engine's generation check.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wheel::consts::{SPIN_DURATION_MS, WHEEL_SIZE_PX};
use wheel::engine::WheelCore;
use wheel::render;

/// The spinning wheel: canvas surface, rotating disc wrapper, and the fixed
/// pointer at 3 o'clock that marks the winning slice.
#[component]
pub fn WheelCanvas(wheel: RwSignal<WheelCore>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Full redraw on every state change; the renderer has no incremental mode.
    Effect::new(move || {
        let slices = wheel.with(WheelCore::slices);
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(ctx) = context_2d(&canvas) else {
            log::debug!("2d canvas context unavailable; skipping draw");
            return;
        };
        if let Err(err) = render::draw(&ctx, &slices, WHEEL_SIZE_PX) {
            log::debug!("wheel draw failed: {err:?}");
        }
    });

    let on_spin = move |_| {
        // Spinning an empty wheel is a silent no-op.
        let Some(plan) = wheel
            .try_update(|w| w.begin_spin(js_sys::Math::random()))
            .flatten()
        else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_millis(SPIN_DURATION_MS)).await;
            wheel.update(|w| {
                if w.settle(&plan) {
                    log::info!("spin {} landed on {}", plan.generation, plan.entry.label());
                }
            });
        });
    };

    let rotation = move || format!("rotate({}deg)", wheel.with(|w| w.spin.rotation));

    view! {
        <div class="wheel-canvas">
            <div class="wheel-canvas__disc" style:transform=rotation on:click=on_spin>
                <canvas
                    node_ref=canvas_ref
                    class="wheel-canvas__surface"
                    width="300"
                    height="300"
                >
                    "Your browser does not support canvas."
                </canvas>
            </div>
            <div class="wheel-canvas__pointer"></div>
        </div>
    }
}

/// Look up the 2D context of the mounted canvas element.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    let ctx = canvas.get_context("2d").ok().flatten()?;
    ctx.dyn_into::<CanvasRenderingContext2d>().ok()
}

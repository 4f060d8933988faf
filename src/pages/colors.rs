//! Colors wheel page: a wheel pre-seeded with the fixed palette.

use leptos::prelude::*;
use wheel::engine::WheelCore;
use wheel::geometry::palette_entries;

use crate::components::entry_list::EntryListPanel;
use crate::components::result_modal::ResultModal;
use crate::components::wheel_canvas::WheelCanvas;

/// Colors wheel — starts with every palette color; colors can be removed
/// and the full palette restored with Reset.
#[component]
pub fn ColorsPage() -> impl IntoView {
    let wheel = RwSignal::new(WheelCore::with_entries(palette_entries()));

    let on_reset = move |_| wheel.update(|w| w.seed(palette_entries()));

    view! {
        <div class="wheel-page">
            <h1 class="wheel-page__title">"Wheel of Colors"</h1>

            <WheelCanvas wheel=wheel/>

            <div class="wheel-page__form">
                <button class="btn" on:click=on_reset>
                    "Reset Colors"
                </button>
            </div>

            <EntryListPanel wheel=wheel/>
            <ResultModal wheel=wheel title="Selected Color"/>
        </div>
    }
}

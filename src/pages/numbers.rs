//! Numbers wheel page: a wheel generated from an inclusive integer range.

use leptos::prelude::*;
use wheel::engine::WheelCore;

use crate::components::result_modal::ResultModal;
use crate::components::wheel_canvas::WheelCanvas;
use crate::state::range::RangeForm;

/// Numbers wheel — generate the entries from a bounded `[min, max]` range.
///
/// Validation is live: messages appear while typing and the Generate button
/// stays disabled until the form is ready. Generation replaces the whole
/// registry.
#[component]
pub fn NumbersPage() -> impl IntoView {
    let wheel = RwSignal::new(WheelCore::new());
    let form = RwSignal::new(RangeForm::default());
    let error = RwSignal::new(None::<String>);

    let on_generate = move |_| {
        let bounds = form.with(RangeForm::bounds);
        match bounds {
            Ok((min, max)) => {
                let Some(result) = wheel.try_update(|w| w.generate_range(min, max)) else {
                    return;
                };
                match result {
                    Ok(()) => error.set(None),
                    Err(range_error) => error.set(Some(range_error.to_string())),
                }
            }
            Err(range_error) => error.set(Some(range_error.to_string())),
        }
    };

    // Live messages win while typing; generation errors show otherwise.
    let message = move || {
        form.with(|f| f.live_error().map(str::to_owned))
            .or_else(|| error.get())
    };

    view! {
        <div class="wheel-page">
            <h1 class="wheel-page__title">"Lucky Number"</h1>

            <WheelCanvas wheel=wheel/>

            <div class="wheel-page__form">
                <input
                    class="wheel-page__input wheel-page__input--number"
                    type="number"
                    min="0"
                    max="100"
                    placeholder="Min"
                    prop:value=move || form.with(|f| f.min.clone())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        form.update(|f| {
                            f.set_min(raw);
                        });
                    }
                />
                <input
                    class="wheel-page__input wheel-page__input--number"
                    type="number"
                    min="0"
                    max="100"
                    placeholder="Max"
                    prop:value=move || form.with(|f| f.max.clone())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        form.update(|f| {
                            f.set_max(raw);
                        });
                    }
                />
                <button
                    class="btn btn--primary"
                    prop:disabled=move || !form.with(RangeForm::is_ready)
                    on:click=on_generate
                >
                    "Generate"
                </button>
            </div>
            <Show when=move || message().is_some()>
                <p class="wheel-page__error">{move || message().unwrap_or_default()}</p>
            </Show>

            <ResultModal wheel=wheel title="Selected Number"/>
        </div>
    }
}

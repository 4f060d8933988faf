//! Result dialog revealed once a spin settles.

use std::borrow::Cow;

use leptos::prelude::*;
use wheel::engine::WheelCore;

/// Modal showing the selected entry with Confirm and Remove actions.
///
/// Confirm closes the dialog and keeps the selection; Remove deletes the
/// selected entry from the wheel, which also closes the dialog. Clicking
/// the backdrop acts like Confirm.
#[component]
pub fn ResultModal(wheel: RwSignal<WheelCore>, title: &'static str) -> impl IntoView {
    let visible = move || wheel.with(|w| w.spin.result_visible);
    let selected = move || {
        wheel.with(|w| w.selected_label().map(Cow::into_owned).unwrap_or_default())
    };

    let on_confirm = Callback::new(move |()| wheel.update(WheelCore::dismiss));
    let on_remove = Callback::new(move |()| {
        wheel.update(|w| {
            let label = w.selected_label().map(Cow::into_owned);
            if let Some(label) = label {
                w.remove(&label);
            }
        });
    });

    view! {
        <Show when=visible>
            <div class="dialog-backdrop" on:click=move |_| on_confirm.run(())>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2 class="dialog__title">{title}": "{selected}</h2>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                            "Confirm"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| on_remove.run(())>
                            "Remove"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

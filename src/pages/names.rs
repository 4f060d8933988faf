//! Names wheel page: a manually curated list of names.

use leptos::prelude::*;
use wheel::engine::WheelCore;
use wheel::entries::Entry;

use crate::components::entry_list::EntryListPanel;
use crate::components::result_modal::ResultModal;
use crate::components::wheel_canvas::WheelCanvas;

/// Names wheel — add and remove free-text names, then spin.
#[component]
pub fn NamesPage() -> impl IntoView {
    let wheel = RwSignal::new(WheelCore::new());
    let new_name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        let raw = new_name.get();
        if raw.trim().is_empty() {
            error.set(Some("Enter a name before adding.".to_owned()));
            return;
        }
        let added = wheel
            .try_update(|w| w.add(Entry::Name(raw.clone())))
            .unwrap_or(false);
        if added {
            new_name.set(String::new());
            error.set(None);
        } else {
            error.set(Some(format!("\"{}\" is already on the wheel.", raw.trim())));
        }
    });

    view! {
        <div class="wheel-page">
            <h1 class="wheel-page__title">"Wheel of Names"</h1>

            <WheelCanvas wheel=wheel/>

            <div class="wheel-page__form">
                <input
                    class="wheel-page__input"
                    type="text"
                    placeholder="Enter name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Add"
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="wheel-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <EntryListPanel wheel=wheel/>
            <ResultModal wheel=wheel title="Selected Name"/>
        </div>
    }
}

//! Entry list panel with per-row remove buttons and a collapsed preview.

use leptos::prelude::*;
use wheel::engine::WheelCore;

/// Entries shown while the list is collapsed.
const PREVIEW_LEN: usize = 3;

/// List of the wheel's current entries.
///
/// Collapsed, only the first few entries are visible; a toggle reveals the
/// rest. Removing a row deletes the entry from the wheel (and clears the
/// result if it was the selected one).
#[component]
pub fn EntryListPanel(wheel: RwSignal<WheelCore>) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let labels = move || wheel.with(|w| w.entries.labels());

    view! {
        <Show when=move || !labels().is_empty()>
            <div class="entry-list">
                {move || {
                    let all = labels();
                    let shown = if expanded.get() { all.len() } else { all.len().min(PREVIEW_LEN) };
                    all.into_iter()
                        .take(shown)
                        .map(|label| {
                            let remove_label = label.clone();
                            view! {
                                <div class="entry-list__row">
                                    <span class="entry-list__label">{label}</span>
                                    <button
                                        class="btn btn--danger entry-list__remove"
                                        on:click=move |_| {
                                            wheel.update(|w| {
                                                w.remove(&remove_label);
                                            });
                                        }
                                    >
                                        "X"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || { labels().len() > PREVIEW_LEN }>
                    <button
                        class="entry-list__toggle"
                        on:click=move |_| expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { "Show Less \u{25b2}" } else { "Show More \u{25bc}" }}
                    </button>
                </Show>
            </div>
        </Show>
    }
}

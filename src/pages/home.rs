//! Landing page with one card per wheel type.

use leptos::prelude::*;

/// Home page — shows a card for each of the three wheels.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Wheel of Choices"</h1>
            <div class="home-page__cards">
                <WheelCard title="Names" href="/names"/>
                <WheelCard title="Numbers" href="/numbers"/>
                <WheelCard title="Colors" href="/colors"/>
            </div>
        </div>
    }
}

/// One clickable card linking to a wheel page.
#[component]
fn WheelCard(title: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <a class="wheel-card" href=href>
            <span class="wheel-card__disc" aria-hidden="true"></span>
            <span class="wheel-card__label">{title}</span>
        </a>
    }
}

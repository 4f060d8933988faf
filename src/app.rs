//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{colors::ColorsPage, home::HomePage, names::NamesPage, numbers::NumbersPage};

/// Root application component.
///
/// Sets up client-side routing. Each wheel page owns its own state, so
/// nothing is provided via context and navigating away destroys the wheel.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Wheel of Choices"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("names") view=NamesPage/>
                <Route path=StaticSegment("numbers") view=NumbersPage/>
                <Route path=StaticSegment("colors") view=ColorsPage/>
            </Routes>
        </Router>
    }
}

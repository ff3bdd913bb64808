//! Light/dark toggle button.

use leptos::prelude::*;

use crate::app::NavContext;

/// Button flipping the persisted theme; shows the mode it switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let nav = expect_context::<NavContext>();

    view! {
        <button
            class="btn nav-bar__theme-toggle"
            on:click=move |_| nav.toggle_theme()
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            {move || if nav.theme().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

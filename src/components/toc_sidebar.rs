//! Table of contents with scroll-synchronized highlighting.
//!
//! ARCHITECTURE
//! ============
//! Entries only ask the navigator to scroll. The highlight is driven by the
//! scroll-spy snapshot, so it moves when the viewport reaches the section.

use leptos::prelude::*;

use crate::app::NavContext;

/// Fixed sidebar listing every registered section in order.
#[component]
pub fn TocSidebar() -> impl IntoView {
    let nav = expect_context::<NavContext>();

    let entries = nav
        .sections()
        .into_iter()
        .map(|section| {
            let active_id = section.id.clone();
            let target_id = section.id;
            view! {
                <button
                    class="toc-sidebar__entry"
                    class:active=move || nav.is_active(&active_id)
                    on:click=move |_| nav.select_section(&target_id)
                >
                    {section.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <aside class="toc-sidebar">
            <nav class="toc-sidebar__list" aria-label="Table of contents">
                {entries}
            </nav>
        </aside>
    }
}

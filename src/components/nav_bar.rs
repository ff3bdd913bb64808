//! Fixed top bar with site links, theme toggle, and the mobile slide-in menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header height here is what the scroller compensates for. On narrow
//! screens the links move into a panel that closes on Escape, on a backdrop
//! click, on following a link, and after selecting a section.

use leptos::prelude::*;

use crate::app::NavContext;
use crate::components::theme_toggle::ThemeToggle;

/// A top-bar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Documentation", href: "/docs", external: false },
    NavLink { label: "PyPI", href: "https://pypi.org/project/pygyat/", external: true },
    NavLink { label: "GitHub", href: "https://github.com/shamith09/pygyat", external: true },
    NavLink {
        label: "VS Code",
        href: "https://marketplace.visualstudio.com/items?itemName=shamith-pasula.vscode-pygyat",
        external: true,
    },
];

fn link_view(link: NavLink, nav: NavContext) -> impl IntoView {
    view! {
        <a
            href=link.href
            class="nav-bar__link"
            target=link.external.then_some("_blank")
            rel=link.external.then_some("noopener noreferrer")
            on:click=move |_| nav.close_menu()
        >
            {link.label}
        </a>
    }
}

/// Site header shared by every page.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let menu_open = move || nav.menu_open();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                nav.close_menu();
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <a href="/" class="nav-bar__brand">
                    <img src="/pygyat.png" alt="PyGyat Logo" width="32" height="32"/>
                    <span class="nav-bar__title">"PyGyat"</span>
                </a>

                <div class="nav-bar__desktop">
                    {NAV_LINKS.into_iter().map(|link| link_view(link, nav)).collect_view()}
                    <ThemeToggle/>
                </div>

                <div class="nav-bar__mobile">
                    <ThemeToggle/>
                    <button
                        class="btn nav-bar__menu-button"
                        class:open=menu_open
                        on:click=move |_| nav.toggle_menu()
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                    >
                        <span class="nav-bar__menu-bar"></span>
                        <span class="nav-bar__menu-bar"></span>
                        <span class="nav-bar__menu-bar"></span>
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <div class="nav-bar__backdrop" on:click=move |_| nav.close_menu()></div>
            </Show>
            <div class="nav-bar__panel" class:open=menu_open>
                {NAV_LINKS.into_iter().map(|link| link_view(link, nav)).collect_view()}
            </div>
        </nav>
    }
}

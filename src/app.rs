//! Root application component with routing and the navigator context.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::adapter::{host_config, host_document};
use crate::pages::{docs::DocsPage, home::HomePage};
use crate::state::nav::{NavSnapshot, NavigationMenu};
use crate::state::preference::{PreferenceStore, Theme};
use crate::state::sections::{Section, SectionRegistry};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SharedPreference::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/docnav.css"/>
        <Title text="PyGyat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("docs") view=DocsPage/>
            </Routes>
        </Router>
    }
}

/// The page load's single [`PreferenceStore`], provided once by [`App`] so
/// route changes never re-read the stored theme.
#[derive(Clone, Copy)]
pub struct SharedPreference(StoredValue<Rc<PreferenceStore>, LocalStorage>);

impl SharedPreference {
    fn new() -> Self {
        let store = PreferenceStore::new(host_document(), host_config().storage_key);
        Self(StoredValue::new_local(Rc::new(store)))
    }

    /// Store from context, or a fresh one when rendered outside [`App`].
    fn current() -> Rc<PreferenceStore> {
        use_context::<Self>().unwrap_or_else(Self::new).0.get_value()
    }
}

/// Navigator for the current page view, shared with components via context.
///
/// The menu itself holds `Rc` state, so it lives in a local stored value;
/// `view` mirrors its [`NavSnapshot`] into a signal the components read.
#[derive(Clone, Copy)]
pub struct NavContext {
    menu: StoredValue<NavigationMenu, LocalStorage>,
    pub view: RwSignal<NavSnapshot>,
}

impl NavContext {
    /// Start `menu` once mounted in the browser and dispose it when the page
    /// view is torn down.
    fn mount(menu: NavigationMenu) -> Self {
        let view = RwSignal::new(menu.snapshot());
        menu.set_listener(move |snapshot| view.set(snapshot.clone()));

        let menu = StoredValue::new_local(menu);
        Effect::new(move || menu.with_value(NavigationMenu::start));
        on_cleanup(move || {
            menu.try_with_value(NavigationMenu::dispose);
        });

        let nav = Self { menu, view };
        provide_context(nav);
        nav
    }

    /// Navigator with a table of contents over `sections`. Logs and returns
    /// `None` if the sections do not form a valid registry.
    pub fn provide(sections: Vec<Section>) -> Option<Self> {
        match SectionRegistry::new(sections) {
            Ok(registry) => {
                let menu = NavigationMenu::new(
                    registry,
                    &host_config(),
                    host_document(),
                    SharedPreference::current(),
                );
                Some(Self::mount(menu))
            }
            Err(err) => {
                leptos::logging::error!("navigator disabled: {err}");
                None
            }
        }
    }

    /// Header-only navigator for pages without a table of contents.
    pub fn provide_without_sections() -> Self {
        Self::mount(NavigationMenu::without_sections(SharedPreference::current()))
    }

    pub fn sections(&self) -> Vec<Section> {
        self.menu
            .with_value(|menu| menu.sections().cloned().collect())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.view.with(|v| v.active_id.as_deref() == Some(id))
    }

    pub fn theme(&self) -> Theme {
        self.view.with(|v| v.theme)
    }

    pub fn menu_open(&self) -> bool {
        self.view.with(|v| v.menu_open)
    }

    pub fn select_section(&self, id: &str) {
        self.menu.with_value(|menu| menu.select_section(id));
    }

    pub fn toggle_menu(&self) {
        self.menu.with_value(NavigationMenu::toggle_menu);
    }

    pub fn close_menu(&self) {
        self.menu.with_value(NavigationMenu::close_menu);
    }

    pub fn toggle_theme(&self) {
        self.menu.with_value(|menu| {
            menu.toggle_theme();
        });
    }
}

//! Navigation menu: composition root for the navigator.
//!
//! DESIGN
//! ======
//! Owns the section registry, scroll-spy, scroller, and the mobile panel's
//! open flag, and shares the page load's preference store. Selecting a
//! section only asks the scroller to move; the scroll-spy stays the single
//! writer of the active id, so the highlight changes when the scroll actually
//! reaches the section.
//!
//! Pages without a table of contents build the menu with
//! [`NavigationMenu::without_sections`]: theme and panel only, no observation.
//!
//! The UI registers one listener and receives a [`NavSnapshot`] after every
//! change, which is its cue to redraw.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::adapter::DocumentAdapter;
use crate::config::NavConfig;
use crate::state::preference::{PreferenceStore, Theme};
use crate::state::scroll_spy::ScrollSpy;
use crate::state::scroller::Scroller;
use crate::state::sections::{Section, SectionRegistry};

/// Render-facing copy of the navigator state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSnapshot {
    /// `None` on pages without a table of contents.
    pub active_id: Option<String>,
    pub theme: Theme,
    pub menu_open: bool,
}

type SnapshotListener = Rc<dyn Fn(&NavSnapshot)>;

struct Toc {
    registry: Rc<SectionRegistry>,
    spy: ScrollSpy,
    scroller: Scroller,
}

struct MenuState {
    toc: Option<Toc>,
    preference: Rc<PreferenceStore>,
    theme_token: Cell<Option<u64>>,
    menu_open: Cell<bool>,
    listener: RefCell<Option<SnapshotListener>>,
}

impl MenuState {
    fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            active_id: self.toc.as_ref().map(|toc| toc.spy.active_id()),
            theme: self.preference.theme(),
            menu_open: self.menu_open.get(),
        }
    }

    fn notify(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(&self.snapshot());
        }
    }

    fn set_menu_open(&self, open: bool) {
        if self.menu_open.replace(open) != open {
            self.notify();
        }
    }

    fn release(&self) {
        if let Some(toc) = &self.toc {
            toc.spy.dispose();
        }
        if let Some(token) = self.theme_token.take() {
            self.preference.unsubscribe(token);
        }
    }
}

impl Drop for MenuState {
    fn drop(&mut self) {
        self.release();
    }
}

/// Table-of-contents navigator with theme toggle and collapsible panel.
#[derive(Clone)]
pub struct NavigationMenu {
    state: Rc<MenuState>,
}

impl NavigationMenu {
    /// Navigator over `registry`. `preference` is shared across page views.
    pub fn new(
        registry: SectionRegistry,
        config: &NavConfig,
        adapter: Rc<dyn DocumentAdapter>,
        preference: Rc<PreferenceStore>,
    ) -> Self {
        let registry = Rc::new(registry);
        let toc = Toc {
            spy: ScrollSpy::new(Rc::clone(&registry), config.band, Rc::clone(&adapter)),
            scroller: Scroller::new(adapter, config.header_offset_px),
            registry,
        };
        Self::assemble(Some(toc), preference)
    }

    /// Theme toggle and mobile panel only.
    pub fn without_sections(preference: Rc<PreferenceStore>) -> Self {
        Self::assemble(None, preference)
    }

    fn assemble(toc: Option<Toc>, preference: Rc<PreferenceStore>) -> Self {
        let state = Rc::new(MenuState {
            toc,
            preference,
            theme_token: Cell::new(None),
            menu_open: Cell::new(false),
            listener: RefCell::new(None),
        });

        if let Some(toc) = &state.toc {
            let weak: Weak<MenuState> = Rc::downgrade(&state);
            toc.spy.subscribe(move |_| {
                if let Some(state) = weak.upgrade() {
                    state.notify();
                }
            });
        }
        let weak: Weak<MenuState> = Rc::downgrade(&state);
        let token = state.preference.subscribe(move |_| {
            if let Some(state) = weak.upgrade() {
                state.notify();
            }
        });
        state.theme_token.set(Some(token));

        Self { state }
    }

    /// Install the redraw hook, replacing any previous one.
    pub fn set_listener(&self, listener: impl Fn(&NavSnapshot) + 'static) {
        *self.state.listener.borrow_mut() = Some(Rc::new(listener));
    }

    /// Apply the stored theme and begin tracking sections. Call on mount.
    pub fn start(&self) {
        self.state.preference.initialize();
        if let Some(toc) = &self.state.toc {
            toc.spy.observe();
        }
        self.state.notify();
    }

    /// Release the scroll-spy observation and stop hearing theme changes.
    /// Idempotent.
    pub fn dispose(&self) {
        self.state.release();
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// TOC entry clicked: scroll there and close the mobile panel.
    pub fn select_section(&self, id: &str) {
        if let Some(toc) = &self.state.toc {
            toc.scroller.scroll_to(id);
        }
        self.state.set_menu_open(false);
    }

    pub fn toggle_menu(&self) {
        let open = !self.state.menu_open.get();
        self.state.set_menu_open(open);
    }

    /// Close the mobile panel (Escape, backdrop click, or a followed link).
    pub fn close_menu(&self) {
        self.state.set_menu_open(false);
    }

    pub fn toggle_theme(&self) -> Theme {
        self.state.preference.toggle()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn active_id(&self) -> Option<String> {
        self.state.toc.as_ref().map(|toc| toc.spy.active_id())
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id().is_some_and(|active| active == id)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.preference.theme()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.state.menu_open.get()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.state.toc.iter().flat_map(|toc| toc.registry.iter())
    }

    #[must_use]
    pub fn snapshot(&self) -> NavSnapshot {
        self.state.snapshot()
    }
}

//! Persisted light/dark preference.
//!
//! Reads the stored choice, falling back to the system color scheme, and
//! applies it to the document root. Toggling writes the choice back. The
//! system fallback is never written: only an explicit toggle persists.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. When storage is unavailable the toggle still
//! updates the in-memory and applied state for the rest of the page load.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::adapter::DocumentAdapter;

/// Display mode. Persisted as the literal `"light"` or `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Interpret a stored value. Anything but `"dark"` reads as light, so a
    /// corrupted entry still counts as an explicit choice.
    #[must_use]
    pub fn from_persisted(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type ThemeListener = Rc<dyn Fn(Theme)>;

/// Holds the current [`Theme`] and keeps storage and the document in sync.
///
/// One store lives for the whole page load and is shared by every page
/// view's navigator, so the in-memory choice survives route changes even
/// when storage is unavailable.
pub struct PreferenceStore {
    adapter: Rc<dyn DocumentAdapter>,
    key: String,
    theme: Cell<Theme>,
    initialized: Cell<bool>,
    listeners: RefCell<Vec<(u64, ThemeListener)>>,
    next_listener: Cell<u64>,
}

impl PreferenceStore {
    pub fn new(adapter: Rc<dyn DocumentAdapter>, key: impl Into<String>) -> Self {
        Self {
            adapter,
            key: key.into(),
            theme: Cell::new(Theme::default()),
            initialized: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Resolve the starting theme and apply it.
    ///
    /// Only the first call reads storage; later calls return the current
    /// theme so a remounted navigator keeps the session's choice.
    pub fn initialize(&self) -> Theme {
        if self.initialized.replace(true) {
            return self.theme.get();
        }
        let stored = match self.adapter.read_persisted(&self.key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(err) => {
                log::debug!("theme preference not readable: {err}");
                None
            }
        };
        let theme = match stored {
            Some(raw) => Theme::from_persisted(&raw),
            None => self.adapter.read_system_color_scheme().unwrap_or_default(),
        };
        self.set(theme);
        theme
    }

    /// Flip the theme, persist it, and apply it.
    pub fn toggle(&self) -> Theme {
        let next = self.theme.get().toggled();
        if let Err(err) = self.adapter.write_persisted(&self.key, next.as_str()) {
            log::debug!("theme preference not persisted: {err}");
        }
        self.set(next);
        next
    }

    /// Register a listener called with the theme after every change. Returns
    /// a token for [`PreferenceStore::unsubscribe`].
    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> u64 {
        let token = self.next_listener.get();
        self.next_listener.set(token + 1);
        self.listeners.borrow_mut().push((token, Rc::new(listener)));
        token
    }

    pub fn unsubscribe(&self, token: u64) {
        self.listeners.borrow_mut().retain(|(t, _)| *t != token);
    }

    fn set(&self, theme: Theme) {
        let changed = self.theme.replace(theme) != theme;
        self.adapter.apply_theme(theme);
        if changed {
            let listeners = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, l)| Rc::clone(l))
                .collect::<Vec<_>>();
            for listener in listeners {
                listener(theme);
            }
        }
    }
}

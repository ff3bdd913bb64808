//! Host document abstraction used by the navigator core.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scroll-spy, scroller, and preference store never touch `window` or
//! `document` directly. They talk to a [`DocumentAdapter`], which the browser
//! build backs with `web-sys` and the server build and tests back with the
//! in-memory [`MemoryDocument`].

pub mod memory;

#[cfg(feature = "hydrate")]
pub mod browser;

use std::rc::Rc;

use crate::config::ActivationBand;
use crate::error::StorageError;
use crate::state::preference::Theme;

pub use memory::MemoryDocument;

/// One intersection change reported for an observed anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self { id: id.into(), is_intersecting }
    }
}

/// Receives every batch of intersection changes for one observation.
pub type IntersectionCallback = Rc<dyn Fn(&[IntersectionEntry])>;

/// Live observation returned by [`DocumentAdapter::observe_intersections`].
///
/// Disconnecting releases the underlying observer exactly once; later calls
/// and the implicit disconnect on drop are no-ops.
pub struct ObserverHandle {
    release: Option<Box<dyn FnOnce()>>,
}

impl ObserverHandle {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A handle with nothing to release, used when observation never started.
    #[must_use]
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn disconnect(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl std::fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Everything the navigator needs from the page it runs in.
pub trait DocumentAdapter {
    /// Top of the anchor `id` in document coordinates, or `None` if absent.
    ///
    /// Must be computed on every call: the viewport origin moves as the page
    /// scrolls, so a cached viewport-relative value would be wrong.
    fn anchor_position(&self, id: &str) -> Option<f64>;

    /// Move the viewport so its top edge lands on `position`.
    ///
    /// An animated call replaces any scroll animation already in flight.
    fn scroll_to(&self, position: f64, animated: bool);

    /// Watch `ids` against `band`, delivering changes in batches to `callback`.
    ///
    /// The first batch describes the current state of every observed anchor.
    fn observe_intersections(
        &self,
        ids: &[String],
        band: ActivationBand,
        callback: IntersectionCallback,
    ) -> ObserverHandle;

    /// Read a persisted string.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage is disabled or the read fails.
    fn read_persisted(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist a string.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage is disabled or the write fails.
    fn write_persisted(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// The OS/browser color-scheme signal, if the host exposes one.
    fn read_system_color_scheme(&self) -> Option<Theme>;

    /// Apply the visual mode marker to the document root.
    fn apply_theme(&self, theme: Theme);
}

/// Adapter for the environment this build runs in.
#[must_use]
pub fn host_document() -> Rc<dyn DocumentAdapter> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(browser::BrowserDocument)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(MemoryDocument::default())
    }
}

/// Navigator config for this build: the page-embedded JSON in the browser,
/// defaults elsewhere.
#[must_use]
pub fn host_config() -> crate::config::NavConfig {
    #[cfg(feature = "hydrate")]
    {
        browser::embedded_config()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        crate::config::NavConfig::default()
    }
}

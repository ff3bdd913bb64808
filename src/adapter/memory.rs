//! In-memory document used for server rendering and tests.
//!
//! DESIGN
//! ======
//! Models just enough of a browser page to drive the navigator: anchors with
//! a document-space top and height, a viewport with a scroll offset, a smooth
//! scroll that advances one frame at a time, `localStorage`, and a color
//! scheme signal. Intersection changes are computed per frame and delivered
//! as one batch per observation, like `IntersectionObserver`.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::adapter::{DocumentAdapter, IntersectionCallback, IntersectionEntry, ObserverHandle};
use crate::config::ActivationBand;
use crate::error::StorageError;
use crate::state::preference::Theme;

/// Fraction of the remaining distance covered by one animation frame.
const SMOOTH_SCROLL_EASE: f64 = 0.35;

/// Distance under which an animation snaps to its target.
const SMOOTH_SCROLL_SNAP_PX: f64 = 0.5;

/// Upper bound on frames run by [`MemoryDocument::settle`].
const MAX_SETTLE_FRAMES: usize = 1_000;

const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

#[derive(Clone, Debug)]
struct Anchor {
    id: String,
    top: f64,
    height: f64,
}

struct Watch {
    token: u64,
    ids: Vec<String>,
    band: ActivationBand,
    callback: IntersectionCallback,
    last: HashMap<String, bool>,
}

#[derive(Default)]
struct Page {
    anchors: Vec<Anchor>,
    min_document_height: f64,
    viewport_height: f64,
    scroll_y: f64,
    scroll_target: Option<f64>,
    scroll_requests: Vec<(f64, bool)>,
    storage: HashMap<String, String>,
    storage_disabled: bool,
    system_scheme: Option<Theme>,
    applied: Option<Theme>,
}

/// A scriptable stand-in for the browser page.
pub struct MemoryDocument {
    page: RefCell<Page>,
    watches: Rc<RefCell<Vec<Watch>>>,
    next_token: Cell<u64>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new(viewport_height: f64) -> Self {
        Self {
            page: RefCell::new(Page { viewport_height: viewport_height.max(0.0), ..Page::default() }),
            watches: Rc::new(RefCell::new(Vec::new())),
            next_token: Cell::new(0),
        }
    }

    // =========================================================================
    // PAGE SETUP
    // =========================================================================

    /// Add an anchor spanning `[top, top + height]` in document coordinates.
    #[must_use]
    pub fn with_anchor(self, id: &str, top: f64, height: f64) -> Self {
        self.page
            .borrow_mut()
            .anchors
            .push(Anchor { id: id.to_owned(), top, height });
        self
    }

    /// Lay out `ids` back to back from `start`, each `height` tall.
    #[must_use]
    pub fn with_stacked_anchors(self, ids: &[&str], start: f64, height: f64) -> Self {
        ids.iter().enumerate().fold(self, |doc, (i, id)| {
            #[allow(clippy::cast_precision_loss)]
            let top = start + height * i as f64;
            doc.with_anchor(id, top, height)
        })
    }

    /// Extend the scrollable height past the last anchor.
    #[must_use]
    pub fn with_document_height(self, height: f64) -> Self {
        self.page.borrow_mut().min_document_height = height;
        self
    }

    #[must_use]
    pub fn with_system_scheme(self, scheme: Theme) -> Self {
        self.page.borrow_mut().system_scheme = Some(scheme);
        self
    }

    #[must_use]
    pub fn with_persisted(self, key: &str, value: &str) -> Self {
        self.page
            .borrow_mut()
            .storage
            .insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make every storage call fail, like a browser with storage disabled.
    pub fn set_storage_disabled(&self, disabled: bool) {
        self.page.borrow_mut().storage_disabled = disabled;
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.page.borrow().scroll_y
    }

    /// Target of the animation in flight, if any.
    #[must_use]
    pub fn scroll_target(&self) -> Option<f64> {
        self.page.borrow().scroll_target
    }

    /// Every `scroll_to` request received, oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<(f64, bool)> {
        self.page.borrow().scroll_requests.clone()
    }

    /// Raw stored value, bypassing the disabled flag.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.page.borrow().storage.get(key).cloned()
    }

    /// Mode last applied to the root, `None` before the first apply.
    #[must_use]
    pub fn applied_theme(&self) -> Option<Theme> {
        self.page.borrow().applied
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.watches.borrow().len()
    }

    /// Ids currently touching `band`, in document order.
    #[must_use]
    pub fn intersecting_ids(&self, band: ActivationBand) -> Vec<String> {
        let page = self.page.borrow();
        let mut hits = page
            .anchors
            .iter()
            .filter(|a| band.intersects(page.scroll_y, page.viewport_height, a.top, a.height))
            .collect::<Vec<_>>();
        hits.sort_by(|a, b| a.top.total_cmp(&b.top));
        hits.into_iter().map(|a| a.id.clone()).collect()
    }

    // =========================================================================
    // DRIVING
    // =========================================================================

    /// Jump the viewport as a user scroll would, cancelling any animation.
    pub fn user_scroll_to(&self, y: f64) {
        {
            let mut page = self.page.borrow_mut();
            page.scroll_target = None;
            page.scroll_y = clamp_scroll(&page, y);
        }
        self.deliver_changes();
    }

    /// Advance the smooth scroll by one frame. Returns whether it is still
    /// running afterwards.
    pub fn advance_frame(&self) -> bool {
        let running = {
            let mut page = self.page.borrow_mut();
            let Some(target) = page.scroll_target else {
                return false;
            };
            let remaining = target - page.scroll_y;
            if remaining.abs() <= SMOOTH_SCROLL_SNAP_PX {
                page.scroll_y = target;
                page.scroll_target = None;
                false
            } else {
                page.scroll_y += remaining * SMOOTH_SCROLL_EASE;
                true
            }
        };
        self.deliver_changes();
        running
    }

    /// Run frames until the animation in flight lands.
    pub fn settle(&self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.advance_frame() {
                return;
            }
        }
    }

    /// Deliver a hand-built batch to every observation, as a host with
    /// reordered or coalesced callbacks would.
    pub fn emit_batch(&self, entries: &[IntersectionEntry]) {
        let callbacks = self
            .watches
            .borrow()
            .iter()
            .map(|w| w.callback.clone())
            .collect::<Vec<_>>();
        for callback in callbacks {
            callback(entries);
        }
    }

    fn deliver_changes(&self) {
        let batches = {
            let page = self.page.borrow();
            let mut watches = self.watches.borrow_mut();
            watches
                .iter_mut()
                .filter_map(|watch| {
                    let mut batch = Vec::new();
                    for anchor in sorted_anchors(&page, &watch.ids) {
                        let now = watch.band.intersects(page.scroll_y, page.viewport_height, anchor.top, anchor.height);
                        if watch.last.insert(anchor.id.clone(), now) != Some(now) {
                            batch.push(IntersectionEntry::new(anchor.id.clone(), now));
                        }
                    }
                    (!batch.is_empty()).then(|| (watch.callback.clone(), batch))
                })
                .collect::<Vec<_>>()
        };
        for (callback, batch) in batches {
            callback(&batch);
        }
    }

    fn check_storage(&self) -> Result<(), StorageError> {
        if self.page.borrow().storage_disabled {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

/// Observed anchors in document order, so batches follow scroll order.
fn sorted_anchors<'a>(page: &'a Page, ids: &[String]) -> Vec<&'a Anchor> {
    let mut anchors = page
        .anchors
        .iter()
        .filter(|a| ids.contains(&a.id))
        .collect::<Vec<_>>();
    anchors.sort_by(|a, b| a.top.total_cmp(&b.top));
    anchors
}

fn clamp_scroll(page: &Page, y: f64) -> f64 {
    let content_bottom = page
        .anchors
        .iter()
        .map(|a| a.top + a.height)
        .fold(page.min_document_height, f64::max);
    let max_scroll = (content_bottom - page.viewport_height).max(0.0);
    y.clamp(0.0, max_scroll)
}

impl DocumentAdapter for MemoryDocument {
    fn anchor_position(&self, id: &str) -> Option<f64> {
        self.page
            .borrow()
            .anchors
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.top)
    }

    fn scroll_to(&self, position: f64, animated: bool) {
        {
            let mut page = self.page.borrow_mut();
            page.scroll_requests.push((position, animated));
            let target = clamp_scroll(&page, position);
            if animated {
                page.scroll_target = Some(target);
                return;
            }
            page.scroll_target = None;
            page.scroll_y = target;
        }
        self.deliver_changes();
    }

    fn observe_intersections(
        &self,
        ids: &[String],
        band: ActivationBand,
        callback: IntersectionCallback,
    ) -> ObserverHandle {
        let token = self.next_token.get();
        self.next_token.set(token + 1);

        let initial = {
            let page = self.page.borrow();
            sorted_anchors(&page, ids)
                .into_iter()
                .map(|a| {
                    let now = band.intersects(page.scroll_y, page.viewport_height, a.top, a.height);
                    IntersectionEntry::new(a.id.clone(), now)
                })
                .collect::<Vec<_>>()
        };
        self.watches.borrow_mut().push(Watch {
            token,
            ids: ids.to_vec(),
            band,
            callback: callback.clone(),
            last: initial.iter().map(|e| (e.id.clone(), e.is_intersecting)).collect(),
        });
        if !initial.is_empty() {
            callback(&initial);
        }

        let watches: Weak<RefCell<Vec<Watch>>> = Rc::downgrade(&self.watches);
        ObserverHandle::new(move || {
            if let Some(watches) = watches.upgrade() {
                watches.borrow_mut().retain(|w| w.token != token);
            }
        })
    }

    fn read_persisted(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_storage()?;
        Ok(self.stored(key))
    }

    fn write_persisted(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_storage()?;
        self.page
            .borrow_mut()
            .storage
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn read_system_color_scheme(&self) -> Option<Theme> {
        self.page.borrow().system_scheme
    }

    fn apply_theme(&self, theme: Theme) {
        self.page.borrow_mut().applied = Some(theme);
    }
}

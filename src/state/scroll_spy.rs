//! Tracks which registered section the reader is currently in.
//!
//! ARCHITECTURE
//! ============
//! All anchors feed one observation through a single dispatcher, so teardown
//! is one `dispose` call. Each delivered batch resolves to at most one new
//! active id: the last intersecting entry wins, non-intersecting entries are
//! ignored, and listeners hear about the batch once. When nothing is in the
//! activation band the previous id stays active.
//!
//! The last-wins rule follows scroll order for normal scrolling. A host that
//! coalesces a fast jump into one out-of-order batch can briefly pick the
//! wrong section; the next scroll batch corrects it.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::adapter::{DocumentAdapter, IntersectionEntry, ObserverHandle};
use crate::config::ActivationBand;
use crate::state::sections::SectionRegistry;

type ActiveListener = Rc<dyn Fn(&str)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Observing,
    Disposed,
}

struct SpyState {
    registry: Rc<SectionRegistry>,
    band: ActivationBand,
    adapter: Rc<dyn DocumentAdapter>,
    phase: Cell<Phase>,
    active_id: RefCell<String>,
    observed: RefCell<Vec<String>>,
    handle: RefCell<Option<ObserverHandle>>,
    listeners: RefCell<Vec<(u64, ActiveListener)>>,
    next_listener: Cell<u64>,
}

/// Scroll-spy over a [`SectionRegistry`].
pub struct ScrollSpy {
    state: Rc<SpyState>,
}

impl ScrollSpy {
    pub fn new(registry: Rc<SectionRegistry>, band: ActivationBand, adapter: Rc<dyn DocumentAdapter>) -> Self {
        let active_id = registry.first().id.clone();
        Self {
            state: Rc::new(SpyState {
                registry,
                band,
                adapter,
                phase: Cell::new(Phase::Idle),
                active_id: RefCell::new(active_id),
                observed: RefCell::new(Vec::new()),
                handle: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// Currently highlighted section id.
    #[must_use]
    pub fn active_id(&self) -> String {
        self.state.active_id.borrow().clone()
    }

    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.state.phase.get() == Phase::Observing
    }

    /// Start watching every registered section that has an anchor.
    ///
    /// Sections without an anchor are skipped and can never become active.
    /// Calling this while observing, or after `dispose`, does nothing.
    pub fn observe(&self) {
        let state = &self.state;
        if state.phase.get() != Phase::Idle {
            return;
        }

        let ids = state
            .registry
            .iter()
            .filter(|section| {
                let present = state.adapter.anchor_position(&section.id).is_some();
                if !present {
                    log::debug!("scroll spy: no anchor for section `{}`", section.id);
                }
                present
            })
            .map(|section| section.id.clone())
            .collect::<Vec<_>>();

        state.phase.set(Phase::Observing);
        *state.observed.borrow_mut() = ids.clone();
        let weak: Weak<SpyState> = Rc::downgrade(state);
        let handle = state.adapter.observe_intersections(
            &ids,
            state.band,
            Rc::new(move |entries: &[IntersectionEntry]| {
                if let Some(state) = weak.upgrade() {
                    state.apply_batch(entries);
                }
            }),
        );
        *state.handle.borrow_mut() = Some(handle);
    }

    /// Ids actually being watched, in registry order.
    #[must_use]
    pub fn observed_ids(&self) -> Vec<String> {
        self.state.observed.borrow().clone()
    }

    /// Stop watching. Safe to call any number of times.
    pub fn dispose(&self) {
        self.state.phase.set(Phase::Disposed);
        let handle = self.state.handle.borrow_mut().take();
        if let Some(mut handle) = handle {
            handle.disconnect();
        }
    }

    /// Register a listener for active-id changes. Returns a token for
    /// [`ScrollSpy::unsubscribe`].
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> u64 {
        let token = self.state.next_listener.get();
        self.state.next_listener.set(token + 1);
        self.state
            .listeners
            .borrow_mut()
            .push((token, Rc::new(listener)));
        token
    }

    pub fn unsubscribe(&self, token: u64) {
        self.state
            .listeners
            .borrow_mut()
            .retain(|(t, _)| *t != token);
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl SpyState {
    fn apply_batch(&self, entries: &[IntersectionEntry]) {
        if self.phase.get() != Phase::Observing {
            return;
        }
        let Some(winner) = entries
            .iter()
            .rev()
            .find(|e| e.is_intersecting && self.observed.borrow().contains(&e.id))
        else {
            return;
        };
        if *self.active_id.borrow() == winner.id {
            return;
        }
        *self.active_id.borrow_mut() = winner.id.clone();

        let listeners = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect::<Vec<_>>();
        for listener in listeners {
            listener(&winner.id);
        }
    }
}

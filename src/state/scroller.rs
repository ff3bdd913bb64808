//! Header-compensated smooth scrolling to a section anchor.

#[cfg(test)]
#[path = "scroller_test.rs"]
mod scroller_test;

use std::rc::Rc;

use crate::adapter::DocumentAdapter;

/// Scroll position that puts an anchor at `anchor_top` just below a fixed
/// header `header_offset_px` tall. Never negative.
#[must_use]
pub fn header_compensated_offset(anchor_top: f64, header_offset_px: f64) -> f64 {
    (anchor_top - header_offset_px).max(0.0)
}

/// Moves the viewport. The only component that does so on purpose.
pub struct Scroller {
    adapter: Rc<dyn DocumentAdapter>,
    header_offset_px: f64,
}

impl Scroller {
    pub fn new(adapter: Rc<dyn DocumentAdapter>, header_offset_px: f64) -> Self {
        Self { adapter, header_offset_px }
    }

    /// Smooth-scroll to `section_id`. A missing anchor is a no-op.
    ///
    /// The anchor position is read fresh on every call, so the result does
    /// not depend on where the viewport started. A call made while an earlier
    /// scroll is still animating retargets that animation.
    pub fn scroll_to(&self, section_id: &str) {
        let Some(anchor_top) = self.adapter.anchor_position(section_id) else {
            log::debug!("scroller: no anchor for section `{section_id}`");
            return;
        };
        let target = header_compensated_offset(anchor_top, self.header_offset_px);
        self.adapter.scroll_to(target, true);
    }
}

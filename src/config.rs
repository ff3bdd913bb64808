//! Navigator tuning constants and the optional JSON config overlay.
//!
//! The defaults reproduce the shipped docs page: an 80px fixed header and an
//! activation band that ignores the top 20% and bottom 80% of the viewport.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Height of the fixed header plus padding, subtracted from scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Storage key holding the literal `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Element id of the optional embedded JSON config.
pub const CONFIG_ELEMENT_ID: &str = "docnav-config";

/// Vertical viewport region in which a section counts as "being read".
///
/// Insets are percentages of the viewport height measured from the top and
/// bottom edges. With the default 20/80 the band collapses to the line 20%
/// below the top edge, so at most one section straddles it at a time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivationBand {
    pub top_inset_pct: f64,
    pub bottom_inset_pct: f64,
}

impl ActivationBand {
    pub const DEFAULT: Self = Self { top_inset_pct: 20.0, bottom_inset_pct: 80.0 };

    /// CSS `rootMargin` form understood by `IntersectionObserver`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("-{}% 0px -{}% 0px", self.top_inset_pct, self.bottom_inset_pct)
    }

    /// Band edges in document coordinates for a viewport at `scroll_y`.
    #[must_use]
    pub fn edges(&self, scroll_y: f64, viewport_height: f64) -> (f64, f64) {
        let top = scroll_y + viewport_height * self.top_inset_pct / 100.0;
        let bottom = scroll_y + viewport_height * (100.0 - self.bottom_inset_pct) / 100.0;
        (top, bottom)
    }

    /// Whether the vertical span `[top, top + height]` touches the band.
    ///
    /// A degenerate band (zero height) still intersects a span that crosses
    /// its line, matching `IntersectionObserver` edge-inclusive behavior.
    #[must_use]
    pub fn intersects(&self, scroll_y: f64, viewport_height: f64, top: f64, height: f64) -> bool {
        let (band_top, band_bottom) = self.edges(scroll_y, viewport_height);
        let bottom = top + height.max(0.0);
        top <= band_bottom && bottom >= band_top && height > 0.0
    }
}

impl Default for ActivationBand {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tunables for one navigator instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub header_offset_px: f64,
    pub band: ActivationBand,
    pub storage_key: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_offset_px: HEADER_OFFSET_PX,
            band: ActivationBand::DEFAULT,
            storage_key: THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl NavConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed JSON and `InvalidConfig` when a
    /// value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, NavError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges that would make the band or offset meaningless.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` describing the first offending field.
    pub fn validate(&self) -> Result<(), NavError> {
        if !self.header_offset_px.is_finite() || self.header_offset_px < 0.0 {
            return Err(NavError::InvalidConfig(format!(
                "header_offset_px must be a non-negative number, got {}",
                self.header_offset_px
            )));
        }
        let ActivationBand { top_inset_pct, bottom_inset_pct } = self.band;
        let in_range = |pct: f64| pct.is_finite() && (0.0..=100.0).contains(&pct);
        if !in_range(top_inset_pct) || !in_range(bottom_inset_pct) {
            return Err(NavError::InvalidConfig("band insets must be within 0..=100".to_owned()));
        }
        if top_inset_pct + bottom_inset_pct > 100.0 {
            return Err(NavError::InvalidConfig(format!(
                "band insets overlap: {top_inset_pct} + {bottom_inset_pct} > 100"
            )));
        }
        if self.storage_key.trim().is_empty() {
            return Err(NavError::InvalidConfig("storage_key must not be empty".to_owned()));
        }
        Ok(())
    }
}

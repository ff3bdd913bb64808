//! `web-sys` implementation of [`DocumentAdapter`].
//!
//! Requires a browser environment. Every DOM or storage failure is logged at
//! debug level and otherwise ignored: the navigator must never break page
//! rendering.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions};

use crate::adapter::{DocumentAdapter, IntersectionCallback, IntersectionEntry, ObserverHandle};
use crate::config::{ActivationBand, CONFIG_ELEMENT_ID, DARK_CLASS, NavConfig};
use crate::error::StorageError;
use crate::state::preference::Theme;

/// Adapter over the global `window` and `document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StorageError::Unavailable),
    }
}

impl DocumentAdapter for BrowserDocument {
    fn anchor_position(&self, id: &str) -> Option<f64> {
        let window = web_sys::window()?;
        let element = window.document()?.get_element_by_id(id)?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        Some(element.get_bounding_client_rect().top() + scroll_y)
    }

    fn scroll_to(&self, position: f64, animated: bool) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(position);
        options.set_behavior(if animated { ScrollBehavior::Smooth } else { ScrollBehavior::Instant });
        window.scroll_to_with_scroll_to_options(&options);
    }

    fn observe_intersections(
        &self,
        ids: &[String],
        band: ActivationBand,
        callback: IntersectionCallback,
    ) -> ObserverHandle {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return ObserverHandle::inert();
        };

        let dispatch = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|value| match value.dyn_into::<IntersectionObserverEntry>() {
                        Ok(entry) => Some(IntersectionEntry::new(entry.target().id(), entry.is_intersecting())),
                        Err(_) => None,
                    })
                    .collect::<Vec<_>>();
                callback(&batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&band.root_margin());
        let observer = match IntersectionObserver::new_with_options(dispatch.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::debug!("intersection observer unavailable: {err:?}");
                return ObserverHandle::inert();
            }
        };

        for id in ids {
            if let Some(element) = document.get_element_by_id(id) {
                observer.observe(&element);
            }
        }

        ObserverHandle::new(move || {
            observer.disconnect();
            drop(dispatch);
        })
    }

    fn read_persisted(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read(format!("{err:?}")))
    }

    fn write_persisted(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }

    fn read_system_color_scheme(&self) -> Option<Theme> {
        match web_sys::window()?.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(query)) => Some(if query.matches() { Theme::Dark } else { Theme::Light }),
            Ok(None) | Err(_) => None,
        }
    }

    fn apply_theme(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let class_list = root.class_list();
        let toggled = if theme.is_dark() {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };
        if let Err(err) = toggled {
            log::debug!("could not toggle root class: {err:?}");
        }
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            log::debug!("could not set data-theme: {err:?}");
        }
    }
}

/// Config embedded by the page as JSON, or defaults when absent or invalid.
#[must_use]
pub fn embedded_config() -> NavConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return NavConfig::default();
    };
    match NavConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            NavConfig::default()
        }
    }
}

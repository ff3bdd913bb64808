use std::cell::Cell;

use super::*;
use crate::adapter::MemoryDocument;

const KEY: &str = "theme";

fn store_on(doc: &Rc<MemoryDocument>) -> PreferenceStore {
    let adapter: Rc<dyn DocumentAdapter> = doc.clone();
    PreferenceStore::new(adapter, KEY)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_literals_match_storage_format() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn unknown_persisted_value_reads_as_light() {
    assert_eq!(Theme::from_persisted("dark"), Theme::Dark);
    assert_eq!(Theme::from_persisted("light"), Theme::Light);
    assert_eq!(Theme::from_persisted("DARK"), Theme::Light);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn first_load_uses_system_dark_without_persisting() {
    let doc = Rc::new(MemoryDocument::default().with_system_scheme(Theme::Dark));
    let store = store_on(&doc);

    assert_eq!(store.initialize(), Theme::Dark);
    assert_eq!(doc.applied_theme(), Some(Theme::Dark));
    assert_eq!(doc.stored(KEY), None);

    store.toggle();
    assert_eq!(doc.stored(KEY).as_deref(), Some("light"));
}

#[test]
fn no_system_signal_defaults_to_light() {
    let doc = Rc::new(MemoryDocument::default());
    let store = store_on(&doc);
    assert_eq!(store.initialize(), Theme::Light);
    assert_eq!(doc.applied_theme(), Some(Theme::Light));
}

#[test]
fn persisted_value_beats_system_signal() {
    let doc = Rc::new(
        MemoryDocument::default()
            .with_system_scheme(Theme::Dark)
            .with_persisted(KEY, "light"),
    );
    assert_eq!(store_on(&doc).initialize(), Theme::Light);
}

#[test]
fn empty_persisted_value_falls_back_to_system() {
    let doc = Rc::new(
        MemoryDocument::default()
            .with_system_scheme(Theme::Dark)
            .with_persisted(KEY, ""),
    );
    assert_eq!(store_on(&doc).initialize(), Theme::Dark);
}

#[test]
fn unreadable_storage_falls_back_to_system() {
    let doc = Rc::new(
        MemoryDocument::default()
            .with_system_scheme(Theme::Dark)
            .with_persisted(KEY, "light"),
    );
    doc.set_storage_disabled(true);
    assert_eq!(store_on(&doc).initialize(), Theme::Dark);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_survives_reload() {
    let doc = Rc::new(MemoryDocument::default().with_system_scheme(Theme::Dark));
    let store = store_on(&doc);
    store.initialize();
    assert_eq!(store.toggle(), Theme::Light);

    let reloaded = store_on(&doc);
    assert_eq!(reloaded.initialize(), Theme::Light);
    assert_eq!(doc.applied_theme(), Some(Theme::Light));
}

#[test]
fn toggle_keeps_memory_applied_and_stored_in_step() {
    let doc = Rc::new(MemoryDocument::default());
    let store = store_on(&doc);
    store.initialize();

    for _ in 0..3 {
        let theme = store.toggle();
        assert_eq!(store.theme(), theme);
        assert_eq!(doc.applied_theme(), Some(theme));
        assert_eq!(doc.stored(KEY).as_deref(), Some(theme.as_str()));
    }
}

#[test]
fn toggle_without_storage_still_applies() {
    let doc = Rc::new(MemoryDocument::default());
    doc.set_storage_disabled(true);
    let store = store_on(&doc);
    store.initialize();

    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(store.theme(), Theme::Dark);
    assert_eq!(doc.applied_theme(), Some(Theme::Dark));
    assert_eq!(doc.stored(KEY), None);
}

#[test]
fn listeners_hear_changes_only() {
    let doc = Rc::new(MemoryDocument::default());
    let store = store_on(&doc);
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    store.subscribe(move |_| seen.set(seen.get() + 1));

    store.initialize();
    assert_eq!(calls.get(), 0, "light to light is not a change");
    store.toggle();
    store.toggle();
    assert_eq!(calls.get(), 2);
}

#[test]
fn unsubscribed_listener_is_silent() {
    let doc = Rc::new(MemoryDocument::default());
    let store = store_on(&doc);
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let token = store.subscribe(move |_| seen.set(seen.get() + 1));

    store.toggle();
    store.unsubscribe(token);
    store.toggle();
    assert_eq!(calls.get(), 1);
}

// =============================================================
// repeated initialize
// =============================================================

#[test]
fn second_initialize_keeps_session_choice() {
    let doc = Rc::new(MemoryDocument::default().with_system_scheme(Theme::Dark));
    doc.set_storage_disabled(true);
    let store = store_on(&doc);

    assert_eq!(store.initialize(), Theme::Dark);
    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(store.initialize(), Theme::Light);
    assert_eq!(doc.applied_theme(), Some(Theme::Light));
}

#[test]
fn second_initialize_does_not_reread_storage() {
    let doc = Rc::new(MemoryDocument::default().with_persisted(KEY, "dark"));
    let store = store_on(&doc);
    assert_eq!(store.initialize(), Theme::Dark);

    doc.write_persisted(KEY, "light").unwrap();
    assert_eq!(store.initialize(), Theme::Dark);
    assert_eq!(doc.applied_theme(), Some(Theme::Dark));
}

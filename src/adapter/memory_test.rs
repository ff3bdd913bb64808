#![allow(clippy::float_cmp)]

use std::cell::RefCell;

use super::*;

fn recorder() -> (IntersectionCallback, Rc<RefCell<Vec<Vec<IntersectionEntry>>>>) {
    let batches = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&batches);
    let callback: IntersectionCallback = Rc::new(move |entries: &[IntersectionEntry]| {
        sink.borrow_mut().push(entries.to_vec());
    });
    (callback, batches)
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn anchor_position_is_document_absolute() {
    let doc = MemoryDocument::new(500.0).with_anchor("a", 1200.0, 100.0);
    assert_eq!(doc.anchor_position("a"), Some(1200.0));
    doc.user_scroll_to(600.0);
    assert_eq!(doc.anchor_position("a"), Some(1200.0));
    assert_eq!(doc.anchor_position("b"), None);
}

#[test]
fn scroll_is_clamped_to_document() {
    let doc = MemoryDocument::new(500.0).with_anchor("a", 0.0, 1000.0);
    doc.user_scroll_to(-50.0);
    assert_eq!(doc.scroll_y(), 0.0);
    doc.user_scroll_to(9_000.0);
    assert_eq!(doc.scroll_y(), 500.0);
}

#[test]
fn instant_scroll_jumps() {
    let doc = MemoryDocument::new(500.0).with_document_height(2000.0);
    doc.scroll_to(700.0, false);
    assert_eq!(doc.scroll_y(), 700.0);
    assert_eq!(doc.scroll_target(), None);
}

#[test]
fn user_scroll_cancels_animation() {
    let doc = MemoryDocument::new(500.0).with_document_height(2000.0);
    doc.scroll_to(1000.0, true);
    doc.user_scroll_to(100.0);
    assert_eq!(doc.scroll_target(), None);
    assert!(!doc.advance_frame());
    assert_eq!(doc.scroll_y(), 100.0);
}

#[test]
fn observe_delivers_initial_state_then_changes_only() {
    let doc = MemoryDocument::new(1000.0)
        .with_stacked_anchors(&["a", "b", "c"], 0.0, 500.0)
        .with_document_height(3000.0);
    let (callback, batches) = recorder();
    let _handle = doc.observe_intersections(&ids(&["a", "b", "c"]), ActivationBand::DEFAULT, callback);

    assert_eq!(
        batches.borrow()[0],
        vec![
            IntersectionEntry::new("a", true),
            IntersectionEntry::new("b", false),
            IntersectionEntry::new("c", false),
        ]
    );

    doc.user_scroll_to(100.0);
    assert_eq!(batches.borrow().len(), 1, "no transition, no batch");

    doc.user_scroll_to(400.0);
    assert_eq!(
        batches.borrow()[1],
        vec![IntersectionEntry::new("a", false), IntersectionEntry::new("b", true)]
    );
}

#[test]
fn unobserved_anchors_are_not_reported() {
    let doc = MemoryDocument::new(1000.0).with_stacked_anchors(&["a", "b"], 0.0, 500.0);
    let (callback, batches) = recorder();
    let _handle = doc.observe_intersections(&ids(&["b", "ghost"]), ActivationBand::DEFAULT, callback);
    assert_eq!(batches.borrow()[0], vec![IntersectionEntry::new("b", false)]);
}

#[test]
fn disconnect_releases_the_watch_once() {
    let doc = MemoryDocument::new(1000.0).with_stacked_anchors(&["a", "b"], 0.0, 500.0);
    let (callback, batches) = recorder();
    let mut handle = doc.observe_intersections(&ids(&["a", "b"]), ActivationBand::DEFAULT, callback);
    assert!(handle.is_connected());
    assert_eq!(doc.observer_count(), 1);

    handle.disconnect();
    handle.disconnect();
    assert!(!handle.is_connected());
    assert_eq!(doc.observer_count(), 0);

    doc.emit_batch(&[IntersectionEntry::new("b", true)]);
    assert_eq!(batches.borrow().len(), 1);
}

#[test]
fn storage_round_trip_and_disable() {
    let doc = MemoryDocument::default();
    assert_eq!(doc.read_persisted("theme"), Ok(None));
    assert_eq!(doc.write_persisted("theme", "dark"), Ok(()));
    assert_eq!(doc.read_persisted("theme"), Ok(Some("dark".to_owned())));

    doc.set_storage_disabled(true);
    assert_eq!(doc.read_persisted("theme"), Err(StorageError::Unavailable));
    assert_eq!(doc.write_persisted("theme", "light"), Err(StorageError::Unavailable));
    assert_eq!(doc.stored("theme").as_deref(), Some("dark"));
}

#[test]
fn theme_signal_and_apply() {
    let doc = MemoryDocument::default();
    assert_eq!(doc.read_system_color_scheme(), None);
    assert_eq!(doc.applied_theme(), None);
    doc.apply_theme(Theme::Dark);
    assert_eq!(doc.applied_theme(), Some(Theme::Dark));

    let dark = MemoryDocument::default().with_system_scheme(Theme::Dark);
    assert_eq!(dark.read_system_color_scheme(), Some(Theme::Dark));
}

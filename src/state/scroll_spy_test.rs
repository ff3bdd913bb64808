use std::cell::{Cell, RefCell};

use super::*;
use crate::adapter::MemoryDocument;
use crate::state::sections::Section;

const IDS: [&str; 4] = ["introduction", "key-features", "installation", "quick-intro"];

fn registry(ids: &[&str]) -> Rc<SectionRegistry> {
    let sections = ids.iter().map(|id| Section::new(*id, id.to_uppercase())).collect();
    Rc::new(SectionRegistry::new(sections).unwrap())
}

/// Viewport 1000 tall, so the default band line sits 200px below the top.
/// Sections are 500px tall, stacked from the top of the document.
fn stacked_doc() -> Rc<MemoryDocument> {
    Rc::new(
        MemoryDocument::new(1000.0)
            .with_stacked_anchors(&IDS, 0.0, 500.0)
            .with_document_height(3000.0),
    )
}

fn spy_on(doc: &Rc<MemoryDocument>, ids: &[&str]) -> ScrollSpy {
    let adapter: Rc<dyn DocumentAdapter> = doc.clone();
    ScrollSpy::new(registry(ids), ActivationBand::DEFAULT, adapter)
}

#[test]
fn starts_on_first_section() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &IDS);
    assert_eq!(spy.active_id(), "introduction");
    spy.observe();
    assert_eq!(spy.active_id(), "introduction");
}

#[test]
fn deep_link_starts_on_section_in_band() {
    let doc = stacked_doc();
    doc.user_scroll_to(1100.0);
    let spy = spy_on(&doc, &IDS);
    spy.observe();
    assert_eq!(spy.active_id(), "installation");
}

#[test]
fn scrolling_moves_highlight() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &IDS);
    spy.observe();

    doc.user_scroll_to(400.0);
    assert_eq!(spy.active_id(), "key-features");
    doc.user_scroll_to(1600.0);
    assert_eq!(spy.active_id(), "quick-intro");
    doc.user_scroll_to(0.0);
    assert_eq!(spy.active_id(), "introduction");
}

#[test]
fn downward_scroll_only_advances_in_registry_order() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &IDS);
    let registry = registry(&IDS);
    spy.observe();

    let mut last = 0;
    let mut visited = vec![spy.active_id()];
    for step in 0..=40 {
        doc.user_scroll_to(f64::from(step) * 50.0);
        let position = registry.position(&spy.active_id()).unwrap();
        assert!(position >= last, "highlight went back from {last} to {position}");
        last = position;
        if visited.last() != Some(&spy.active_id()) {
            visited.push(spy.active_id());
        }
    }
    assert_eq!(visited, IDS.to_vec());
}

#[test]
fn one_notification_per_batch() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &IDS);
    spy.observe();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    spy.subscribe(move |id| sink.borrow_mut().push(id.to_owned()));

    doc.emit_batch(&[
        IntersectionEntry::new("key-features", true),
        IntersectionEntry::new("installation", true),
        IntersectionEntry::new("key-features", true),
        IntersectionEntry::new("installation", true),
    ]);

    assert_eq!(spy.active_id(), "installation");
    assert_eq!(*seen.borrow(), vec!["installation".to_owned()]);
}

#[test]
fn last_intersecting_entry_wins_even_out_of_order() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &IDS);
    spy.observe();

    doc.emit_batch(&[
        IntersectionEntry::new("quick-intro", true),
        IntersectionEntry::new("key-features", true),
        IntersectionEntry::new("installation", false),
    ]);
    assert_eq!(spy.active_id(), "key-features");

    // The next real scroll batch corrects it.
    doc.user_scroll_to(1600.0);
    assert_eq!(spy.active_id(), "quick-intro");
}

#[test]
fn empty_band_keeps_last_active() {
    let doc = Rc::new(
        MemoryDocument::new(1000.0)
            .with_anchor("introduction", 0.0, 300.0)
            .with_anchor("key-features", 1200.0, 300.0)
            .with_document_height(4000.0),
    );
    let spy = spy_on(&doc, &["introduction", "key-features"]);
    spy.observe();

    doc.user_scroll_to(400.0);
    assert!(doc.intersecting_ids(ActivationBand::DEFAULT).is_empty());
    assert_eq!(spy.active_id(), "introduction");
}

#[test]
fn unchanged_id_does_not_notify() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &IDS);
    spy.observe();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    spy.subscribe(move |_| counter.set(counter.get() + 1));

    doc.emit_batch(&[IntersectionEntry::new("introduction", true)]);
    assert_eq!(calls.get(), 0);
}

#[test]
fn section_without_anchor_is_never_observed() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &["introduction", "ghost", "key-features"]);
    spy.observe();

    assert_eq!(spy.observed_ids(), vec!["introduction", "key-features"]);
    doc.emit_batch(&[IntersectionEntry::new("ghost", true)]);
    assert_eq!(spy.active_id(), "introduction");
}

#[test]
fn unsubscribed_listener_is_silent() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &IDS);
    spy.observe();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let token = spy.subscribe(move |_| counter.set(counter.get() + 1));
    spy.unsubscribe(token);

    doc.user_scroll_to(400.0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn observe_twice_registers_one_observer() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &IDS);
    spy.observe();
    spy.observe();
    assert_eq!(doc.observer_count(), 1);
    assert!(spy.is_observing());
}

#[test]
fn dispose_stops_updates_and_is_idempotent() {
    let doc = stacked_doc();
    let spy = spy_on(&doc, &IDS);
    spy.observe();
    spy.dispose();
    spy.dispose();

    assert_eq!(doc.observer_count(), 0);
    assert!(!spy.is_observing());
    doc.user_scroll_to(1600.0);
    assert_eq!(spy.active_id(), "introduction");

    spy.observe();
    assert_eq!(doc.observer_count(), 0);
}

#[test]
fn dropping_spy_releases_observer() {
    let doc = stacked_doc();
    {
        let spy = spy_on(&doc, &IDS);
        spy.observe();
        assert_eq!(doc.observer_count(), 1);
    }
    assert_eq!(doc.observer_count(), 0);
}

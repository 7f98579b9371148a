use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tabledom::{
    find_all_by_tag, find_by_tag, find_element, Element, Event, EventKind, EventResult, Handlers,
    Key, Modifiers, MouseButton,
};

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_click_invokes_handler_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let td = Element::td().on(EventKind::Click, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(td.has_handler(EventKind::Click));
    assert_eq!(td.simulate(EventKind::Click), EventResult::Consumed);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unbound_kind_is_ignored() {
    let td = Element::td().on(EventKind::Click, |_| {});
    assert_eq!(td.simulate(EventKind::MouseEnter), EventResult::Ignored);
    assert!(!td.simulate(EventKind::Blur).is_handled());
}

#[test]
fn test_handler_receives_event_unchanged() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let td = Element::td()
        .id("cell")
        .on(EventKind::Click, move |event| {
            sink.lock().unwrap().push(event.clone());
        });

    let event = Event::Click {
        target: Some("cell".into()),
        x: 4,
        y: 2,
        button: MouseButton::Right,
    };
    td.dispatch(&event);

    assert_eq!(*seen.lock().unwrap(), vec![event]);
}

#[test]
fn test_key_handler_sees_each_key() {
    let keys = Arc::new(Mutex::new(Vec::new()));
    let sink = keys.clone();
    let td = Element::td().id("cell").on(EventKind::Key, move |event| {
        if let Event::Key { key, .. } = event {
            sink.lock().unwrap().push(*key);
        }
    });

    for key in [Key::Char('c'), Key::Escape] {
        let event = Event::Key {
            target: Some("cell".into()),
            key,
            modifiers: Modifiers::new(),
        };
        assert!(td.dispatch(&event).is_handled());
    }
    td.simulate(EventKind::Key);

    assert_eq!(
        *keys.lock().unwrap(),
        vec![Key::Char('c'), Key::Escape, Key::Enter]
    );
}

#[test]
fn test_synthetic_event_targets_element() {
    let event = Event::synthetic(EventKind::MouseEnter, "cell");
    assert_eq!(event.kind(), EventKind::MouseEnter);
    assert_eq!(event.target(), Some("cell"));
}

#[test]
fn test_handlers_share_closures_when_cloned() {
    let handlers = Handlers::new().on(EventKind::DoubleClick, |_| {});
    let copy = handlers.clone();
    assert_eq!(handlers, copy);
    assert_eq!(copy.kinds().collect::<Vec<_>>(), vec![EventKind::DoubleClick]);

    let other = Handlers::new().on(EventKind::DoubleClick, |_| {});
    assert_ne!(handlers, other);
}

// ============================================================================
// Tree queries
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = Element::tr()
        .id("row")
        .child(Element::td().id("a").content("1"))
        .child(Element::td().id("b").content("2"));

    assert_eq!(find_element(&root, "b").map(|e| e.text_content()), Some("2".into()));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_by_tag_and_text_content() {
    let root = Element::td().child(
        Element::tag("h3")
            .child(Element::text("A"))
            .child(Element::text("B")),
    );

    let h3 = find_by_tag(&root, "h3").expect("h3 present");
    assert_eq!(h3.text_content(), "AB");
    assert_eq!(root.text_content(), "AB");
    assert_eq!(find_all_by_tag(&root, "span").len(), 2);
}

#[test]
fn test_class_queries() {
    let td = Element::td().class("td-test-class  other").class("other");
    assert!(td.has_class("td-test-class"));
    assert!(td.has_class("other"));
    assert_eq!(td.classes.len(), 2);
}

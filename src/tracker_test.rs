#![allow(clippy::float_cmp)]

use super::*;
use crate::config::StartOverrides;
use crate::fake::{CallLog, FakeDom, FakeNode};

type Tracker = DragTracker<FakeDom, &'static str>;
type Config = DragConfig<FakeDom, &'static str>;

// =============================================================
// Helpers
// =============================================================

fn recording_config(log: &CallLog) -> Config {
    let start_log = log.clone();
    let move_log = log.clone();
    let end_log = log.clone();
    Config::new()
        .on_start(move |_, data| {
            start_log.push(format!("start {}", data.unwrap_or(&"-")));
            None
        })
        .on_move(move |dx, dy, _, data| move_log.push(format!("move {dx},{dy} {}", data.unwrap_or(&"-"))))
        .on_end(move |_, data| end_log.push(format!("end {}", data.unwrap_or(&"-"))))
}

fn attached(dom: &Rc<FakeDom>, config: Config, node: &FakeNode) -> (Rc<Tracker>, crate::fake::FakeListener) {
    let tracker = Tracker::new(Rc::clone(dom), Rc::new(config));
    let Ok(listener) = tracker.attach(node) else {
        panic!("attach should succeed");
    };
    (tracker, listener)
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn press_moves_release_fire_in_order() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (_tracker, _press) = attached(&dom, recording_config(&log), &node);

    dom.press(&node, 10.0, 10.0);
    dom.move_to(11.0, 10.0);
    dom.move_to(12.0, 10.0);
    dom.move_to(13.0, 15.0);
    dom.release(13.0, 15.0);

    assert_eq!(
        log.entries(),
        vec!["start -", "move 1,0 -", "move 2,0 -", "move 3,5 -", "end -"]
    );
}

#[test]
fn release_without_moves_fires_start_then_end() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (_tracker, _press) = attached(&dom, recording_config(&log), &node);

    dom.press(&node, 0.0, 0.0);
    dom.release(0.0, 0.0);

    assert_eq!(log.entries(), vec!["start -", "end -"]);
}

#[test]
fn moves_before_press_are_ignored() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, _press) = attached(&dom, recording_config(&log), &node);

    dom.move_to(5.0, 5.0);
    dom.release(5.0, 5.0);

    assert!(log.entries().is_empty());
    assert!(!tracker.is_dragging());
}

// =============================================================
// Deltas
// =============================================================

#[test]
fn delta_uses_start_from_on_start() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let move_log = log.clone();
    let config = Config::new()
        .on_start(|_, _| Some(StartOverrides::new().start(50.0, 50.0)))
        .on_move(move |dx, dy, _, _| move_log.push(format!("{dx},{dy}")));
    let (_tracker, _press) = attached(&dom, config, &node);

    dom.press(&node, 100.0, 100.0);
    dom.move_to(120.0, 130.0);

    assert_eq!(log.entries(), vec!["70,80"]);
}

#[test]
fn delta_ignores_element_offset_without_overrides() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::with_offset(1, 300.0, 200.0);
    let (_tracker, _press) = attached(&dom, recording_config(&log), &node);

    dom.press(&node, 100.0, 100.0);
    dom.move_to(120.0, 130.0);

    assert_eq!(log.entries(), vec!["start -", "move 20,30 -"]);
}

#[test]
fn move_and_release_prevent_default() {
    let dom = FakeDom::new();
    let node = FakeNode::new(1);
    let (_tracker, _press) = attached(&dom, Config::new(), &node);

    dom.press(&node, 0.0, 0.0);
    let moved = dom.move_to(1.0, 1.0);
    let released = dom.release(1.0, 1.0);

    assert!(moved.prevented());
    assert!(released.prevented());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn override_callbacks_apply_to_current_session_only() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let first = Rc::new(std::cell::Cell::new(true));
    let start_first = Rc::clone(&first);
    let override_log = log.clone();
    let config_log = log.clone();
    let config = Config::new()
        .on_start(move |_, _| {
            if start_first.replace(false) {
                let override_log = override_log.clone();
                Some(StartOverrides::new().on_move(move |_, _, _, _| override_log.push("override")))
            } else {
                None
            }
        })
        .on_move(move |_, _, _, _| config_log.push("config"));
    let (_tracker, _press) = attached(&dom, config, &node);

    dom.press(&node, 0.0, 0.0);
    dom.move_to(1.0, 1.0);
    dom.release(1.0, 1.0);
    dom.press(&node, 0.0, 0.0);
    dom.move_to(1.0, 1.0);
    dom.release(1.0, 1.0);

    assert_eq!(log.entries(), vec!["override", "config"]);
}

// =============================================================
// Cancellation and cleanup
// =============================================================

#[test]
fn context_menu_ends_drag_once() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, _press) = attached(&dom, recording_config(&log), &node);

    dom.press(&node, 0.0, 0.0);
    dom.move_to(1.0, 0.0);
    let menu = dom.context_menu(1.0, 0.0);
    dom.move_to(2.0, 0.0);
    dom.move_to(3.0, 0.0);
    dom.release(3.0, 0.0);

    assert!(menu.prevented());
    assert!(!tracker.is_dragging());
    assert_eq!(log.count_prefix("end"), 1);
    assert_eq!(log.count_prefix("move"), 1);
}

#[test]
fn release_removes_all_session_listeners() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (_tracker, _press) = attached(&dom, recording_config(&log), &node);

    dom.press(&node, 0.0, 0.0);
    assert_eq!(dom.global_listeners(EventKind::MouseMove), 1);
    assert_eq!(dom.global_listeners(EventKind::MouseUp), 1);
    assert_eq!(dom.global_listeners(EventKind::ContextMenu), 1);

    dom.release(0.0, 0.0);
    assert_eq!(dom.global_listeners(EventKind::MouseMove), 0);
    assert_eq!(dom.global_listeners(EventKind::MouseUp), 0);
    assert_eq!(dom.global_listeners(EventKind::ContextMenu), 0);
    assert_eq!(dom.node_listeners(&node, EventKind::MouseDown), 1);

    dom.move_to(50.0, 50.0);
    assert_eq!(log.count_prefix("move"), 0);
}

#[test]
fn second_press_while_dragging_is_ignored() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (_tracker, _press) = attached(&dom, recording_config(&log), &node);

    dom.press(&node, 0.0, 0.0);
    dom.press(&node, 50.0, 50.0);
    dom.move_to(10.0, 10.0);

    assert_eq!(log.count_prefix("start"), 1);
    assert_eq!(dom.global_listeners(EventKind::MouseMove), 1);
    assert_eq!(log.entries(), vec!["start -", "move 10,10 -"]);
}

#[test]
fn teardown_drops_listeners_without_on_end() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, _press) = attached(&dom, recording_config(&log), &node);

    dom.press(&node, 0.0, 0.0);
    tracker.teardown();
    dom.release(0.0, 0.0);

    assert_eq!(dom.global_listeners(EventKind::MouseUp), 0);
    assert_eq!(log.entries(), vec!["start -"]);
}

#[test]
fn dropping_press_listener_detaches() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, press) = attached(&dom, recording_config(&log), &node);

    drop(press);
    dom.press(&node, 0.0, 0.0);

    assert!(!tracker.is_dragging());
    assert_eq!(dom.listener_count(), 0);
}

#[test]
fn dropped_tracker_ignores_events() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, _press) = attached(&dom, recording_config(&log), &node);

    drop(tracker);
    dom.press(&node, 0.0, 0.0);

    assert!(log.entries().is_empty());
    assert_eq!(dom.global_listeners(EventKind::MouseMove), 0);
}

#[test]
fn refused_session_listener_still_allows_release() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, _press) = attached(&dom, recording_config(&log), &node);
    dom.refuse(EventKind::MouseMove);

    dom.press(&node, 0.0, 0.0);
    dom.move_to(5.0, 5.0);
    dom.release(5.0, 5.0);

    assert!(!tracker.is_dragging());
    assert_eq!(log.entries(), vec!["start -", "end -"]);
}

#[test]
fn drag_without_release_listeners_ends_at_press() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, _press) = attached(&dom, recording_config(&log), &node);
    dom.refuse(EventKind::MouseUp);
    dom.refuse(EventKind::ContextMenu);

    dom.press(&node, 0.0, 0.0);
    assert!(!tracker.is_dragging());
    assert_eq!(dom.global_listeners(EventKind::MouseMove), 0);
    dom.move_to(5.0, 5.0);
    dom.press(&node, 0.0, 0.0);

    assert_eq!(log.entries(), vec!["start -", "end -", "start -", "end -"]);
}

#[test]
fn one_release_path_is_enough_to_keep_the_drag() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, _press) = attached(&dom, recording_config(&log), &node);
    dom.refuse(EventKind::MouseUp);

    dom.press(&node, 0.0, 0.0);
    assert!(tracker.is_dragging());
    dom.context_menu(0.0, 0.0);

    assert!(!tracker.is_dragging());
    assert_eq!(log.entries(), vec!["start -", "end -"]);
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_threads_through_all_callbacks() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, _press) = attached(&dom, recording_config(&log), &node);
    tracker.set_data(Some(Rc::new("card-7")));

    dom.press(&node, 0.0, 0.0);
    dom.move_to(1.0, 1.0);
    dom.release(1.0, 1.0);

    assert_eq!(log.entries(), vec!["start card-7", "move 1,1 card-7", "end card-7"]);
}

#[test]
fn callbacks_may_reenter_tracker() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let tracker = Tracker::new(Rc::clone(&dom), Rc::new(Config::new()));
    let weak = Rc::downgrade(&tracker);
    let start_log = log.clone();
    let move_log = log.clone();
    let end_log = log.clone();
    let config = Config::new()
        .on_start(move |_, data| {
            start_log.push(format!("start {}", data.unwrap_or(&"-")));
            None
        })
        .on_move(move |_, _, _, data| {
            move_log.push(format!("move {}", data.unwrap_or(&"-")));
            if let Some(tracker) = weak.upgrade() {
                tracker.set_data(Some(Rc::new("moved")));
            }
        })
        .on_end(move |_, data| end_log.push(format!("end {}", data.unwrap_or(&"-"))));
    tracker.set_config(Rc::new(config));
    tracker.set_data(Some(Rc::new("card")));
    let Ok(_press) = tracker.attach(&node) else {
        panic!("attach should succeed");
    };

    dom.press(&node, 0.0, 0.0);
    dom.move_to(1.0, 1.0);
    dom.move_to(2.0, 2.0);
    assert!(tracker.is_dragging());
    dom.release(2.0, 2.0);
    dom.press(&node, 0.0, 0.0);

    assert_eq!(tracker.data().as_deref(), Some(&"moved"));
    assert_eq!(log.entries(), vec!["start card", "move card", "move card", "end card", "start moved"]);
}

#[test]
fn payload_is_fixed_for_the_whole_drag() {
    let dom = FakeDom::new();
    let log = CallLog::default();
    let node = FakeNode::new(1);
    let (tracker, _press) = attached(&dom, recording_config(&log), &node);
    tracker.set_data(Some(Rc::new("first")));

    dom.press(&node, 0.0, 0.0);
    tracker.set_data(Some(Rc::new("second")));
    dom.move_to(1.0, 1.0);
    dom.context_menu(1.0, 1.0);

    assert_eq!(log.entries(), vec!["start first", "move 1,1 first", "end first"]);
}

// =============================================================
// Element offset
// =============================================================

#[test]
fn element_offset_is_available_while_dragging() {
    let dom = FakeDom::new();
    let node = FakeNode::with_offset(1, 40.0, 25.0);
    let (tracker, _press) = attached(&dom, Config::new(), &node);

    assert_eq!(tracker.element_offset(), None);
    dom.press(&node, 0.0, 0.0);
    assert_eq!(tracker.element_offset(), Some(crate::point::Point::new(40.0, 25.0)));
    dom.release(0.0, 0.0);
    assert_eq!(tracker.element_offset(), None);
}

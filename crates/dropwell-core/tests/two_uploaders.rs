//! Integration test: two uploaders mounted side by side, driven through
//! full drag gestures and picker selections.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use dropwell_core::{DragState, EmptyDropPolicy, SelectedFile, Uploader, UploaderConfig};

type Deliveries = Rc<RefCell<Vec<String>>>;

fn mount(config: UploaderConfig) -> (Uploader<String>, Deliveries) {
    let deliveries: Deliveries = Rc::default();
    let sink = Rc::clone(&deliveries);
    let uploader = Uploader::new(config, move |selected: SelectedFile<String>| {
        sink.borrow_mut().push(selected.filename);
    });
    (uploader, deliveries)
}

#[test]
fn instances_never_cross_fire() {
    let (mut left, left_log) = mount(UploaderConfig::default());
    let (mut right, right_log) = mount(UploaderConfig::images());

    assert_ne!(left.id(), right.id());
    assert_ne!(left.id().input_id(), right.id().input_id());

    left.manual_select(vec!["handle".to_owned()], r"C:\fakepath\report.pdf")
        .unwrap();
    assert_eq!(*left_log.borrow(), ["report.pdf"]);
    assert!(right_log.borrow().is_empty());

    right.drag_enter();
    assert!(right.is_active());
    assert!(!left.is_active());
    right.drop_files(vec!["photo.png".to_owned()]).unwrap();

    assert_eq!(*left_log.borrow(), ["report.pdf"]);
    assert_eq!(*right_log.borrow(), ["photo.png"]);
}

#[test]
fn rapid_enter_over_drop_observes_two_transitions() {
    let (mut uploader, log) = mount(UploaderConfig::default());
    let transitions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&transitions);
    uploader.subscribe(move |state| sink.borrow_mut().push(state));

    let mut polled = Vec::new();
    // dragenter, then a burst of dragover events, then drop.
    uploader.drag_enter();
    polled.push(uploader.is_active());
    for _ in 0..4 {
        uploader.drag_over();
        polled.push(uploader.is_active());
    }
    uploader.drop_files(vec!["photo.png".to_owned()]).unwrap();
    polled.push(uploader.is_active());

    assert_eq!(
        *transitions.borrow(),
        [DragState::DragOver, DragState::Idle]
    );
    assert_eq!(polled, [true, true, true, true, true, false]);
    assert_eq!(*log.borrow(), ["photo.png"]);
}

#[test]
fn pointer_crossing_children_does_not_flicker() {
    let (mut uploader, log) = mount(UploaderConfig::default());
    let transitions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&transitions);
    uploader.subscribe(move |state| sink.borrow_mut().push(state));

    // Browser order: enter zone, enter icon, leave zone, over icon,
    // enter label, leave icon, over label, then drop on the label.
    uploader.drag_enter();
    uploader.drag_enter();
    uploader.drag_leave();
    assert!(uploader.is_active());
    uploader.drag_over();
    uploader.drag_enter();
    uploader.drag_leave();
    uploader.drag_over();
    assert!(uploader.is_active());
    uploader.drop_files(vec!["photo.png".to_owned()]).unwrap();

    assert_eq!(
        *transitions.borrow(),
        [DragState::DragOver, DragState::Idle]
    );
    assert_eq!(*log.borrow(), ["photo.png"]);
}

#[test]
fn every_gesture_ends_idle() {
    let (mut uploader, log) = mount(UploaderConfig {
        empty_drop: EmptyDropPolicy::Reject,
        ..UploaderConfig::images()
    });

    uploader.drag_enter();
    uploader.drag_leave();
    assert_eq!(uploader.state(), DragState::Idle);

    uploader.drag_enter();
    uploader.drag_end();
    assert_eq!(uploader.state(), DragState::Idle);

    uploader.drag_enter();
    assert!(uploader.drop_files(Vec::new()).is_err());
    assert_eq!(uploader.state(), DragState::Idle);

    uploader.drag_enter();
    assert!(uploader.drop_files(vec!["notes.txt".to_owned()]).is_err());
    assert_eq!(uploader.state(), DragState::Idle);

    assert!(log.borrow().is_empty());
}

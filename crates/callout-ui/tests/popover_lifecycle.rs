//! Lifecycle tests for the popover controller: notification order,
//! animated and immediate transitions, ignored re-entrant calls and
//! tap-to-dismiss.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use callout_ui::{
    ArrowDirection, ArrowDirections, Container, ContainerRef, Insets, OverlayLayer,
    PlacementError, Popover, PopoverError, PopoverObserver, PopoverState, Rect, Size, UiEvent,
    Widget,
};

const FADE: Duration = Duration::from_millis(100);
const PAST_FADE: Duration = Duration::from_millis(150);
const ANCHOR: Rect = Rect::new(20, 40, 60, 60);

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl Recorder {
    fn push(&self, hook: &str, id: &str) {
        self.0.borrow_mut().push(format!("{hook}:{id}"));
    }

    fn events(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl PopoverObserver for Recorder {
    fn will_show(&mut self, id: &str) {
        self.push("will_show", id);
    }

    fn did_show(&mut self, id: &str) {
        self.push("did_show", id);
    }

    fn will_dismiss(&mut self, id: &str) {
        self.push("will_dismiss", id);
    }

    fn did_dismiss(&mut self, id: &str) {
        self.push("did_dismiss", id);
    }
}

fn setup() -> (Popover, Rc<RefCell<OverlayLayer>>, Recorder) {
    let recorder = Recorder::default();
    let popover = Popover::new("menu", "Copy\nPaste")
        .with_content_size(Size::new(200, 100))
        .with_padding(Insets::ZERO)
        .with_fade_duration(FADE)
        .with_observer(recorder.clone());
    let container = Rc::new(RefCell::new(OverlayLayer::new(Rect::new(0, 0, 320, 480))));
    (popover, container, recorder)
}

#[test]
fn immediate_show_and_dismiss_notify_in_order() {
    let (mut popover, container, recorder) = setup();

    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();
    assert_eq!(popover.state(), PopoverState::Shown);
    assert_eq!(container.borrow().attachments().len(), 1);

    popover.dismiss(false);
    assert_eq!(popover.state(), PopoverState::Hidden);
    assert!(container.borrow().is_empty());

    assert_eq!(
        recorder.events(),
        ["will_show:menu", "did_show:menu", "will_dismiss:menu", "did_dismiss:menu"]
    );
}

#[test]
fn end_to_end_placement() {
    let (mut popover, container, _) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();

    let attachment = container.borrow().attachment("menu").cloned().unwrap();
    assert_eq!(attachment.direction, ArrowDirection::Up);
    assert_eq!(attachment.content, Rect::new(0, 60, 200, 160));
}

#[test]
fn animated_show_fires_did_show_after_update() {
    let (mut popover, container, recorder) = setup();

    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, true)
        .unwrap();
    assert_eq!(recorder.events(), ["will_show:menu"]);
    assert!(popover.is_animating());

    popover.update(Duration::from_millis(40));
    assert_eq!(popover.state(), PopoverState::Showing);
    assert!(popover.opacity() > 0.0 && popover.opacity() < 1.0);

    popover.update(PAST_FADE);
    assert_eq!(popover.state(), PopoverState::Shown);
    assert_eq!(recorder.events(), ["will_show:menu", "did_show:menu"]);

    // Idle updates do not repeat the notification
    popover.update(PAST_FADE);
    assert_eq!(recorder.events().len(), 2);
}

#[test]
fn animated_dismiss_keeps_attachment_until_complete() {
    let (mut popover, container, recorder) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();

    popover.dismiss(true);
    assert_eq!(popover.state(), PopoverState::Dismissing);
    assert!(!container.borrow().is_empty());
    assert_eq!(recorder.events().last().map(String::as_str), Some("will_dismiss:menu"));

    popover.update(PAST_FADE);
    assert_eq!(popover.state(), PopoverState::Hidden);
    assert!(container.borrow().is_empty());
    assert_eq!(recorder.events().last().map(String::as_str), Some("did_dismiss:menu"));
}

#[test]
fn show_while_in_flight_is_ignored() {
    let (mut popover, container, recorder) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, true)
        .unwrap();

    popover
        .show(&container, Rect::new(200, 300, 240, 320), ArrowDirections::ANY, true)
        .unwrap();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();

    assert_eq!(recorder.events(), ["will_show:menu"]);
    assert_eq!(container.borrow().attachments().len(), 1);
    assert_eq!(popover.state(), PopoverState::Showing);
}

#[test]
fn show_while_shown_is_ignored() {
    let (mut popover, container, recorder) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();

    assert_eq!(recorder.events(), ["will_show:menu", "did_show:menu"]);
    assert_eq!(container.borrow().attachments().len(), 1);
}

#[test]
fn dismiss_while_hidden_is_ignored() {
    let (mut popover, _, recorder) = setup();
    popover.dismiss(true);
    popover.dismiss(false);

    assert!(recorder.events().is_empty());
    assert_eq!(popover.state(), PopoverState::Hidden);
}

#[test]
fn dismiss_while_showing_is_ignored() {
    let (mut popover, container, recorder) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, true)
        .unwrap();

    popover.dismiss(false);
    popover.dismiss(true);
    assert_eq!(recorder.events(), ["will_show:menu"]);

    popover.update(PAST_FADE);
    assert_eq!(popover.state(), PopoverState::Shown);
}

#[test]
fn show_while_dismissing_is_ignored() {
    let (mut popover, container, recorder) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();
    popover.dismiss(true);

    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();
    assert_eq!(popover.state(), PopoverState::Dismissing);

    popover.update(PAST_FADE);
    assert_eq!(
        recorder.events(),
        ["will_show:menu", "did_show:menu", "will_dismiss:menu", "did_dismiss:menu"]
    );
}

#[test]
fn popover_can_be_shown_again_after_dismiss() {
    let (mut popover, container, recorder) = setup();
    for _ in 0..2 {
        popover
            .show(&container, ANCHOR, ArrowDirections::ANY, true)
            .unwrap();
        popover.update(PAST_FADE);
        popover.dismiss(true);
        popover.update(PAST_FADE);
    }

    assert_eq!(recorder.events().len(), 8);
    assert!(container.borrow().is_empty());
}

#[test]
fn empty_mask_fails_before_any_notification() {
    let (mut popover, container, recorder) = setup();

    let result = popover.show(&container, ANCHOR, ArrowDirections::empty(), false);
    assert_eq!(result, Err(PopoverError::Placement(PlacementError::NoDirections)));
    assert!(recorder.events().is_empty());
    assert!(container.borrow().is_empty());
}

#[test]
fn restricted_mask_limits_direction() {
    let (mut popover, container, _) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirection::Left.into(), false)
        .unwrap();

    let placement = popover.placement().unwrap();
    assert_eq!(placement.direction, ArrowDirection::Left);
    assert_eq!(placement.content.left, 60);
}

#[test]
fn tap_outside_dismisses_with_animation() {
    let (mut popover, container, recorder) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();

    assert!(popover.handle_event(&UiEvent::Tap { x: 300, y: 400 }));
    assert_eq!(popover.state(), PopoverState::Dismissing);

    popover.update(PAST_FADE);
    assert_eq!(popover.state(), PopoverState::Hidden);
    assert_eq!(recorder.events().last().map(String::as_str), Some("did_dismiss:menu"));
}

#[test]
fn tap_inside_is_consumed_without_dismissing() {
    let (mut popover, container, _) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();

    assert!(popover.handle_event(&UiEvent::Tap { x: 10, y: 100 }));
    assert_eq!(popover.state(), PopoverState::Shown);
}

#[test]
fn tap_during_animation_is_swallowed() {
    let (mut popover, container, recorder) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, true)
        .unwrap();

    assert!(popover.handle_event(&UiEvent::Tap { x: 300, y: 400 }));
    assert_eq!(popover.state(), PopoverState::Showing);
    assert_eq!(recorder.events(), ["will_show:menu"]);
}

#[test]
fn non_tap_events_pass_through() {
    let (mut popover, container, _) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();

    assert!(!popover.handle_event(&UiEvent::Tick));
    assert!(!popover.handle_event(&UiEvent::Hover { x: 300, y: 400 }));
}

#[test]
fn offset_container_reports_root_relative_bounds() {
    let (mut popover, _, _) = setup();
    let container = Rc::new(RefCell::new(OverlayLayer::new(Rect::new(100, 50, 420, 530))));

    popover
        .show(&container, ANCHOR.offset(100, 50), ArrowDirections::ANY, false)
        .unwrap();

    let placement = popover.placement().unwrap();
    assert_eq!(placement.content, Rect::new(0, 60, 200, 160));
    assert_eq!(popover.bounds(), Some(Rect::new(100, 110, 300, 210)));

    // Root-relative hit testing
    assert!(popover.handle_event(&UiEvent::Tap { x: 150, y: 150 }));
    assert_eq!(popover.state(), PopoverState::Shown);
}

#[test]
fn dropped_container_still_notifies() {
    let (mut popover, container, recorder) = setup();
    popover
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();
    drop(container);

    popover.dismiss(true);
    popover.update(PAST_FADE);

    assert_eq!(popover.state(), PopoverState::Hidden);
    assert_eq!(recorder.events().last().map(String::as_str), Some("did_dismiss:menu"));
}

#[test]
fn dropping_attached_popover_detaches_it() {
    let container = Rc::new(RefCell::new(OverlayLayer::new(Rect::new(0, 0, 320, 480))));
    {
        let (mut shown, _, _) = setup();
        shown
            .show(&container, ANCHOR, ArrowDirections::ANY, false)
            .unwrap();
        assert_eq!(container.borrow().attachments().len(), 1);
    }
    assert!(container.borrow().is_empty());

    {
        let (mut fading, _, _) = setup();
        fading
            .show(&container, ANCHOR, ArrowDirections::ANY, true)
            .unwrap();
        assert_eq!(fading.state(), PopoverState::Showing);
    }
    assert!(container.borrow().is_empty());
}

#[test]
fn second_popover_is_refused_while_container_occupied() {
    let (mut first, container, _) = setup();
    let (mut second, _, recorder) = setup();
    first
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();

    let result = second.show(&container, ANCHOR, ArrowDirections::ANY, false);
    assert_eq!(result, Err(PopoverError::ContainerOccupied));
    assert_eq!(second.state(), PopoverState::Hidden);
    assert!(recorder.events().is_empty());
    assert_eq!(container.borrow().attachments().len(), 1);

    // Both share the id "menu"; dismissing the refused one must not touch the other
    second.dismiss(false);
    drop(second);
    assert_eq!(container.borrow().attachments().len(), 1);

    first.dismiss(false);
    assert!(container.borrow().is_empty());

    let (mut third, _, _) = setup();
    third
        .show(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();
    assert_eq!(third.state(), PopoverState::Shown);
}

#[test]
fn show_in_accepts_shared_container_handle() {
    let (mut popover, _, recorder) = setup();
    let container: ContainerRef =
        Rc::new(RefCell::new(OverlayLayer::new(Rect::new(0, 0, 320, 480))));

    popover
        .show_in(&container, ANCHOR, ArrowDirections::ANY, false)
        .unwrap();
    assert_eq!(popover.placement().map(|p| p.content), Some(Rect::new(0, 60, 200, 160)));
    assert!(container.borrow().occupant().is_some());

    popover.dismiss(false);
    assert!(container.borrow().occupant().is_none());
    assert_eq!(recorder.events().len(), 4);
}

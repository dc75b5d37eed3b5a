//! Application state for the popover demo

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use callout_ui::{frame_for_element, OverlayLayer, Popover, PopoverContent, PopoverState, Rect};
use tracing::{debug, warn};

use crate::observer::{LifecycleLog, LifecycleStats};
use crate::options::DemoOptions;
use crate::ui::button::{layout_buttons, Button};

pub struct DemoState {
    pub buttons: Vec<Button>,
    pub overlay: Rc<RefCell<OverlayLayer>>,
    pub popover: Option<Popover>,
    pub stats: Rc<RefCell<LifecycleStats>>,
    pub options: DemoOptions,
    pub size: (u16, u16),
    pub status_message: Option<String>,
    pub tick: u64,
}

/// Area popovers may use: everything above the status line
fn overlay_frame(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width as i32, (height as i32 - 1).max(0))
}

impl DemoState {
    pub fn new(options: DemoOptions, width: u16, height: u16) -> Self {
        Self {
            buttons: layout_buttons(width, height),
            overlay: Rc::new(RefCell::new(OverlayLayer::new(overlay_frame(width, height)))),
            popover: None,
            stats: Rc::new(RefCell::new(LifecycleStats::default())),
            options,
            size: (width, height),
            status_message: None,
            tick: 0,
        }
    }

    /// Relayout after a terminal resize; an open popover is closed at once
    pub fn resize(&mut self, width: u16, height: u16) {
        if let Some(popover) = self.popover.as_mut() {
            popover.dismiss(false);
        }
        self.size = (width, height);
        self.buttons = layout_buttons(width, height);
        self.overlay.borrow_mut().set_frame(overlay_frame(width, height));
    }

    /// True while a popover is attached or animating
    pub fn popover_open(&self) -> bool {
        self.popover
            .as_ref()
            .is_some_and(|p| p.state() != PopoverState::Hidden)
    }

    /// Open a popover pointing at the button at `index`
    pub fn open_popover(&mut self, index: usize) {
        if self.popover_open() {
            debug!(index, "Popover already open");
            return;
        }
        let Some(button) = self.buttons.get(index) else {
            return;
        };

        let anchor = frame_for_element(button);
        let content = PopoverContent::new([
            button.label().to_string(),
            format!("anchor {anchor}"),
            "tap outside to close".to_string(),
        ]);
        let mut popover = Popover::new(format!("popover-{}", index + 1), content)
            .fit_to_content()
            .with_observer(LifecycleLog::new(self.stats.clone()));

        match popover.show(&self.overlay, anchor, self.options.directions, self.options.animate) {
            Ok(()) => {
                if let Some(placement) = popover.placement() {
                    self.status_message =
                        Some(format!("{} opens {}", button.label(), placement.direction));
                }
                self.popover = Some(popover);
            }
            Err(e) => {
                warn!(error = %e, "Could not show popover");
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn dismiss_popover(&mut self) {
        if let Some(popover) = self.popover.as_mut() {
            popover.dismiss(self.options.animate);
        }
    }

    pub fn toggle_animation(&mut self) {
        self.options.animate = !self.options.animate;
        self.status_message = Some(format!(
            "animations {}",
            if self.options.animate { "on" } else { "off" }
        ));
    }

    pub fn update(&mut self, dt: Duration) {
        if let Some(popover) = self.popover.as_mut() {
            popover.update(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callout_ui::{ArrowDirection, ArrowDirections, Container};

    fn state(animate: bool) -> DemoState {
        let options = DemoOptions {
            directions: ArrowDirections::ANY,
            animate,
        };
        DemoState::new(options, 80, 25)
    }

    #[test]
    fn test_open_popover_attaches_to_overlay() {
        let mut state = state(false);
        state.open_popover(0);

        assert!(state.popover_open());
        let overlay = state.overlay.borrow();
        let attachment = overlay.attachment("popover-1").unwrap();
        // Top-left button has the most room below it
        assert_eq!(attachment.direction, ArrowDirection::Up);
        assert_eq!(state.stats.borrow().shown, 1);
    }

    #[test]
    fn test_second_open_is_ignored_while_open() {
        let mut state = state(false);
        state.open_popover(0);
        state.open_popover(8);

        assert_eq!(state.overlay.borrow().attachments().len(), 1);
        assert!(state.overlay.borrow().attachment("popover-1").is_some());
    }

    #[test]
    fn test_animated_dismiss_runs_through_update() {
        let mut state = state(true);
        state.open_popover(4);
        state.update(Duration::from_secs(1));
        assert_eq!(state.stats.borrow().shown, 1);

        state.dismiss_popover();
        assert!(state.popover_open());
        state.update(Duration::from_secs(1));

        assert!(!state.popover_open());
        assert!(state.overlay.borrow().is_empty());
        assert_eq!(state.stats.borrow().dismissed, 1);
    }

    #[test]
    fn test_empty_mask_reports_error() {
        let options = DemoOptions {
            directions: ArrowDirections::empty(),
            animate: false,
        };
        let mut state = DemoState::new(options, 80, 25);
        state.open_popover(0);

        assert!(!state.popover_open());
        assert_eq!(
            state.status_message.as_deref(),
            Some("placement failed: no arrow directions permitted")
        );
    }

    #[test]
    fn test_resize_closes_popover_and_relayouts() {
        let mut state = state(true);
        state.open_popover(0);
        state.update(Duration::from_secs(1));

        state.resize(100, 40);
        assert!(!state.popover_open());
        assert_eq!(state.overlay.borrow().frame(), Rect::new(0, 0, 100, 39));
    }
}

//! Demo event handlers

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use callout_ui::{UiEvent, Widget};
use tracing::debug;

use crate::state::DemoState;

/// Route one event; returns false to quit
pub fn handle_event(event: UiEvent, state: &mut DemoState) -> bool {
    // An open popover sees taps first
    if let Some(popover) = state.popover.as_mut() {
        if popover.handle_event(&event) {
            return true;
        }
    }

    match event {
        UiEvent::Key(key) => handle_key(key, state),
        UiEvent::Tap { .. } => {
            let hit = state
                .buttons
                .iter_mut()
                .position(|button| button.handle_event(&event));
            if let Some(index) = hit {
                state.open_popover(index);
            }
            true
        }
        UiEvent::Resize { width, height } => {
            state.resize(width, height);
            true
        }
        UiEvent::Hover { .. } | UiEvent::Tick => true,
    }
}

fn handle_key(key: KeyEvent, state: &mut DemoState) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Esc if state.popover_open() => state.dismiss_popover(),
        KeyCode::Esc | KeyCode::Char('q') => return false,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            debug!(index, "Open popover from keyboard");
            state.open_popover(index);
        }
        KeyCode::Char('a') => state.toggle_animation(),
        _ => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DemoOptions;
    use callout_ui::{frame_for_element, ArrowDirections, PopoverState};

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn state() -> DemoState {
        let options = DemoOptions {
            directions: ArrowDirections::ANY,
            animate: false,
        };
        DemoState::new(options, 80, 25)
    }

    #[test]
    fn test_digit_opens_and_escape_dismisses() {
        let mut state = state();
        assert!(handle_event(key(KeyCode::Char('5')), &mut state));
        assert!(state.popover_open());

        assert!(handle_event(key(KeyCode::Esc), &mut state));
        assert!(!state.popover_open());

        // Escape with nothing open quits
        assert!(!handle_event(key(KeyCode::Esc), &mut state));
    }

    #[test]
    fn test_tap_on_button_opens_popover() {
        let mut state = state();
        let (x, y) = frame_for_element(&state.buttons[2]).origin();
        handle_event(UiEvent::Tap { x, y }, &mut state);

        let popover = state.popover.as_ref().unwrap();
        assert_eq!(popover.id(), "popover-3");
        assert_eq!(popover.state(), PopoverState::Shown);
    }

    #[test]
    fn test_tap_outside_popover_closes_it_first() {
        let mut state = state();
        handle_event(key(KeyCode::Char('1')), &mut state);

        // Bottom-right button, far from the open popover
        let (x, y) = frame_for_element(&state.buttons[8]).origin();
        handle_event(UiEvent::Tap { x, y }, &mut state);

        // Animated dismiss is still running, nothing new opened
        let popover = state.popover.as_ref().unwrap();
        assert_eq!(popover.id(), "popover-1");
        assert_eq!(popover.state(), PopoverState::Dismissing);
    }
}

//! Touch simulator for terminal development
//!
//! Maps keyboard and mouse input to taps so popovers can be exercised
//! without a touch screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use super::UiEvent;

/// Simulates touch input from keyboard and mouse
#[derive(Debug, Clone)]
pub struct TouchSimulator {
    /// Cursor column
    cursor_x: i32,
    /// Cursor row
    cursor_y: i32,
    /// Surface size the cursor is confined to
    width: u16,
    height: u16,
    /// Cells moved per arrow key press
    step: i32,
}

impl TouchSimulator {
    /// Create a simulator with the cursor centred on a surface
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cursor_x: width as i32 / 2,
            cursor_y: height as i32 / 2,
            width,
            height,
            step: 1,
        }
    }

    /// Set cells moved per arrow key press
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step.max(1);
        self
    }

    /// Confine the cursor to a new surface size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.move_cursor(0, 0);
    }

    /// Current cursor position
    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor_x, self.cursor_y)
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let max_x = (self.width as i32 - 1).max(0);
        let max_y = (self.height as i32 - 1).max(0);
        self.cursor_x = (self.cursor_x + dx).clamp(0, max_x);
        self.cursor_y = (self.cursor_y + dy).clamp(0, max_y);
    }

    /// Process a keyboard event into UI events
    pub fn process_key(&mut self, key: KeyEvent) -> Vec<UiEvent> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        match key.code {
            KeyCode::Up => self.move_cursor(0, -self.step),
            KeyCode::Down => self.move_cursor(0, self.step),
            KeyCode::Left => self.move_cursor(-self.step, 0),
            KeyCode::Right => self.move_cursor(self.step, 0),
            KeyCode::Char(' ') | KeyCode::Enter => {
                return vec![UiEvent::Tap {
                    x: self.cursor_x,
                    y: self.cursor_y,
                }];
            }
            _ => return vec![UiEvent::Key(key)],
        }

        vec![UiEvent::Hover {
            x: self.cursor_x,
            y: self.cursor_y,
        }]
    }

    /// Process a mouse event into UI events
    pub fn process_mouse(&mut self, mouse: MouseEvent) -> Vec<UiEvent> {
        let (x, y) = (mouse.column as i32, mouse.row as i32);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.cursor_x = x;
                self.cursor_y = y;
                vec![UiEvent::Tap { x, y }]
            }
            MouseEventKind::Moved => {
                self.cursor_x = x;
                self.cursor_y = y;
                vec![UiEvent::Hover { x, y }]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_cursor_movement() {
        let mut sim = TouchSimulator::new(10, 10);
        let events = sim.process_key(press(KeyCode::Up));

        assert_eq!(events, vec![UiEvent::Hover { x: 5, y: 4 }]);
    }

    #[test]
    fn test_cursor_stays_on_surface() {
        let mut sim = TouchSimulator::new(4, 4).with_step(10);
        sim.process_key(press(KeyCode::Left));
        sim.process_key(press(KeyCode::Down));
        assert_eq!(sim.cursor(), (0, 3));
    }

    #[test]
    fn test_space_taps_at_cursor() {
        let mut sim = TouchSimulator::new(10, 10);
        sim.process_key(press(KeyCode::Right));
        let events = sim.process_key(press(KeyCode::Char(' ')));

        assert_eq!(events, vec![UiEvent::Tap { x: 6, y: 5 }]);
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut sim = TouchSimulator::new(10, 10);
        let events = sim.process_key(press(KeyCode::Esc));
        assert!(events[0].is_key());
    }

    #[test]
    fn test_mouse_click_is_tap() {
        let mut sim = TouchSimulator::new(10, 10);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 7,
            modifiers: KeyModifiers::empty(),
        };
        assert_eq!(sim.process_mouse(click), vec![UiEvent::Tap { x: 3, y: 7 }]);
        assert_eq!(sim.cursor(), (3, 7));
    }
}

//! Tappable buttons that popovers point at

use std::time::Duration;

use callout_ui::renderer::{Color, RenderBackend};
use callout_ui::{Rect, ScreenElement, Size, UiEvent, Widget};

pub const BUTTON_SIZE: Size = Size::new(12, 3);

/// A labelled button at a fixed screen position
#[derive(Debug, Clone)]
pub struct Button {
    id: String,
    label: String,
    origin: (i32, i32),
    size: Size,
}

impl Button {
    pub fn new(id: impl Into<String>, label: impl Into<String>, origin: (i32, i32)) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            origin,
            size: BUTTON_SIZE,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn frame(&self) -> Rect {
        Rect::from_origin_size(self.origin.0, self.origin.1, self.size)
    }
}

impl ScreenElement for Button {
    fn screen_origin(&self) -> (i32, i32) {
        self.origin
    }

    fn size(&self) -> Size {
        self.size
    }
}

impl Widget for Button {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> Option<Rect> {
        Some(self.frame())
    }

    fn update(&mut self, _dt: Duration) {}

    fn handle_event(&mut self, event: &UiEvent) -> bool {
        event
            .tap_point()
            .is_some_and(|(x, y)| self.frame().contains(x, y))
    }

    fn render(&self, backend: &mut dyn RenderBackend) {
        let frame = self.frame();
        backend.draw_box(frame, Color::Cyan, 1.0);

        let inner = frame.width() - 2;
        let pad = ((inner - self.label.chars().count() as i32) / 2).max(0);
        backend.draw_text(
            frame.left + 1 + pad,
            frame.center_y(),
            &self.label,
            inner - pad,
            Color::White,
            1.0,
        );
    }

    fn visibility(&self) -> f32 {
        1.0
    }
}

/// Lay out a 3x3 grid of buttons hugging the edges and centre of the screen.
///
/// The bottom row of the screen is left for the status line.
pub fn layout_buttons(width: u16, height: u16) -> Vec<Button> {
    let (w, h) = (width as i32, height as i32 - 1);
    let bw = BUTTON_SIZE.width;
    let bh = BUTTON_SIZE.height;

    let columns = [0, (w - bw) / 2, w - bw].map(|x| x.max(0));
    let rows = [0, (h - bh) / 2, h - bh].map(|y| y.max(0));

    rows.iter()
        .flat_map(|&y| columns.iter().map(move |&x| (x, y)))
        .enumerate()
        .map(|(i, origin)| {
            let n = i + 1;
            Button::new(format!("button-{n}"), format!("Button {n}"), origin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use callout_ui::frame_for_element;

    #[test]
    fn test_grid_covers_corners_and_centre() {
        let buttons = layout_buttons(80, 25);
        assert_eq!(buttons.len(), 9);

        assert_eq!(frame_for_element(&buttons[0]), Rect::new(0, 0, 12, 3));
        assert_eq!(frame_for_element(&buttons[4]), Rect::new(34, 10, 46, 13));
        assert_eq!(frame_for_element(&buttons[8]), Rect::new(68, 21, 80, 24));
    }

    #[test]
    fn test_tiny_screen_keeps_buttons_on_screen() {
        for button in layout_buttons(4, 2) {
            let (x, y) = button.screen_origin();
            assert!(x >= 0 && y >= 0);
        }
    }

    #[test]
    fn test_tap_hit_testing() {
        let mut button = Button::new("b", "B", (10, 5));
        assert!(button.handle_event(&UiEvent::Tap { x: 10, y: 5 }));
        assert!(button.handle_event(&UiEvent::Tap { x: 21, y: 7 }));
        assert!(!button.handle_event(&UiEvent::Tap { x: 22, y: 7 }));
        assert!(!button.handle_event(&UiEvent::Tick));
    }
}

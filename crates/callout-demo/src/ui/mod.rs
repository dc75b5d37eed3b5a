//! Demo rendering
//!
//! Layout:
//! - A 3x3 grid of buttons hugging the screen edges and centre
//! - The open popover, if any, drawn over the grid
//! - A status line on the bottom row

pub mod button;

use callout_ui::renderer::{Color, RenderBackend};
use callout_ui::Widget;

use crate::state::DemoState;

/// Render the whole demo screen
pub fn render_demo(state: &DemoState, backend: &mut dyn RenderBackend) {
    backend.clear(Color::BACKDROP);

    for button in &state.buttons {
        button.render(backend);
    }

    if let Some(popover) = &state.popover {
        popover.render(backend);
    }

    render_status(state, backend);
}

fn render_status(state: &DemoState, backend: &mut dyn RenderBackend) {
    let (width, height) = state.size;
    let y = height as i32 - 1;
    let stats = state.stats.borrow();

    let mut line = format!(
        " 1-9/tap: open  esc: close  a: animate  q: quit | shown {} dismissed {}",
        stats.shown, stats.dismissed
    );
    if let Some(message) = state.status_message.as_ref().or(stats.last_event.as_ref()) {
        line.push_str(" | ");
        line.push_str(message);
    }

    backend.draw_text(0, y, &line, width as i32, Color::Grey, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DemoOptions;
    use callout_ui::CellBuffer;

    #[test]
    fn test_status_line_on_bottom_row() {
        let state = DemoState::new(DemoOptions::default(), 80, 25);
        let mut buf = CellBuffer::new(80, 25);
        render_demo(&state, &mut buf);

        assert!(buf.row_text(24).contains("shown 0 dismissed 0"));
        assert!(buf.row_text(1).contains("Button 1"));
    }

    #[test]
    fn test_open_popover_is_drawn() {
        let options = DemoOptions {
            animate: false,
            ..DemoOptions::default()
        };
        let mut state = DemoState::new(options, 80, 25);
        state.open_popover(4);

        let mut buf = CellBuffer::new(80, 25);
        render_demo(&state, &mut buf);

        let drawn = (0..25).any(|y| buf.row_text(y).contains("tap outside to close"));
        assert!(drawn);
    }
}

//! callout-demo: a terminal playground for popovers
//!
//! A grid of buttons covers the screen edges and centre. Opening a popover
//! on each shows how the placement engine picks the roomiest side.
//!
//! Controls:
//! - 1-9: Open the popover for that button
//! - Arrows + Space/Enter, or mouse click: Tap
//! - Tap outside an open popover or Esc: Dismiss
//! - a: Toggle animations
//! - q: Quit

mod handlers;
mod observer;
mod options;
mod state;
pub mod ui;

use std::time::Duration;

use callout_ui::{renderer::RenderBackend, App, UiEvent};

pub use observer::{LifecycleLog, LifecycleStats};
pub use options::{parse_directions, DemoOptions};

use handlers::handle_event;
use state::DemoState;
use ui::render_demo;

/// The popover demo application
pub struct CalloutDemo {
    options: DemoOptions,
}

impl CalloutDemo {
    pub fn new(options: DemoOptions) -> Self {
        Self { options }
    }
}

impl App for CalloutDemo {
    type State = DemoState;

    fn init(&self) -> Self::State {
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        DemoState::new(self.options, width, height)
    }

    fn handle_event(&mut self, event: UiEvent, state: &mut Self::State) -> bool {
        handle_event(event, state)
    }

    fn update(&mut self, state: &mut Self::State, dt: Duration) {
        state.update(dt);
    }

    fn render(&self, state: &Self::State, backend: &mut dyn RenderBackend) {
        render_demo(state, backend);
    }

    fn on_tick(&mut self, state: &mut Self::State) {
        state.tick = state.tick.wrapping_add(1);
    }
}

/// Run the demo application
pub fn run_demo(options: DemoOptions) -> std::io::Result<()> {
    use callout_ui::app::AppRunner;

    let app = CalloutDemo::new(options);
    let mut runner = AppRunner::new(app)?.with_tick_rate(Duration::from_millis(16));

    runner.run()
}

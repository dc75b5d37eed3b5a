//! Application framework

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info};

use crate::input::{TouchSimulator, UiEvent};
use crate::renderer::{terminal::TerminalBackend, RenderBackend};

/// Application trait
pub trait App {
    /// Application state type
    type State;

    /// Initialize application state
    fn init(&self) -> Self::State;

    /// Handle an event, return true to continue, false to quit
    fn handle_event(&mut self, event: UiEvent, state: &mut Self::State) -> bool;

    /// Advance time-based state by `dt`
    fn update(&mut self, state: &mut Self::State, dt: Duration);

    /// Render the application
    fn render(&self, state: &Self::State, backend: &mut dyn RenderBackend);

    /// Called each tick after `update`
    fn on_tick(&mut self, _state: &mut Self::State) {}
}

/// Application runner for terminal apps
pub struct AppRunner<A: App> {
    app: A,
    backend: TerminalBackend,
    input: TouchSimulator,
    tick_rate: Duration,
    running: bool,
}

impl<A: App> AppRunner<A> {
    /// Create a new app runner
    pub fn new(app: A) -> io::Result<Self> {
        let backend = TerminalBackend::new().map_err(|e| io::Error::other(e.to_string()))?;
        let caps = backend.capabilities();

        Ok(Self {
            app,
            backend,
            input: TouchSimulator::new(caps.width, caps.height),
            tick_rate: Duration::from_millis(16),
            running: true,
        })
    }

    /// Set tick rate
    pub fn with_tick_rate(mut self, rate: Duration) -> Self {
        self.tick_rate = rate;
        self
    }

    /// Access the backend, e.g. to register asset glyphs before running
    pub fn backend_mut(&mut self) -> &mut TerminalBackend {
        &mut self.backend
    }

    fn dispatch(&mut self, events: Vec<UiEvent>, state: &mut A::State) {
        for event in events {
            if !self.app.handle_event(event, state) {
                self.running = false;
                break;
            }
        }
    }

    /// Run the application
    pub fn run(&mut self) -> io::Result<()> {
        // Enter alternate screen and raw mode
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        info!(tick_ms = self.tick_rate.as_millis() as u64, "App started");

        let result = self.run_loop();

        // Cleanup
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        info!("App stopped");

        result
    }

    fn run_loop(&mut self) -> io::Result<()> {
        let mut state = self.app.init();
        let mut last_tick = Instant::now();

        while self.running {
            // Poll for events
            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_default();

            if event::poll(timeout)? {
                match event::read()? {
                    CrosstermEvent::Key(key) => {
                        if key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            self.running = false;
                            continue;
                        }
                        let events = self.input.process_key(key);
                        self.dispatch(events, &mut state);
                    }
                    CrosstermEvent::Mouse(mouse) => {
                        let events = self.input.process_mouse(mouse);
                        self.dispatch(events, &mut state);
                    }
                    CrosstermEvent::Resize(width, height) => {
                        debug!(width, height, "Resize event");
                        self.input.resize(width, height);
                        self.dispatch(vec![UiEvent::Resize { width, height }], &mut state);
                    }
                    _ => {}
                }
            }

            // Check for tick
            let elapsed = last_tick.elapsed();
            if elapsed >= self.tick_rate {
                self.app.update(&mut state, elapsed);
                self.app.on_tick(&mut state);

                // Render
                self.backend
                    .begin_frame()
                    .map_err(|e| io::Error::other(e.to_string()))?;

                self.app.render(&state, &mut self.backend);

                self.backend
                    .end_frame()
                    .map_err(|e| io::Error::other(e.to_string()))?;

                // Send tick event
                self.dispatch(vec![UiEvent::Tick], &mut state);

                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}

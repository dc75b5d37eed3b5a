//! Widget trait definitions

use std::time::Duration;

use crate::geometry::Rect;
use crate::input::UiEvent;
use crate::renderer::RenderBackend;

/// Core trait for anything a host draws and routes input to
pub trait Widget {
    /// Get the widget's unique identifier
    fn id(&self) -> &str;

    /// Root-relative bounds for hit testing, `None` while not on screen
    fn bounds(&self) -> Option<Rect>;

    /// Advance time-based state
    fn update(&mut self, dt: Duration);

    /// Handle an input event, return true if consumed
    fn handle_event(&mut self, event: &UiEvent) -> bool;

    /// Render the widget to the backend
    fn render(&self, backend: &mut dyn RenderBackend);

    /// Current opacity (0.0 - 1.0)
    fn visibility(&self) -> f32;

    /// Check if the widget is interactive
    fn is_interactive(&self) -> bool {
        true
    }
}

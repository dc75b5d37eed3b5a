//! Render backend trait definition

use super::surface::{Color, SurfaceCapabilities};
use crate::assets::AssetHandle;
use crate::geometry::Rect;

/// Error type for rendering operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Backend initialization failed
    #[error("Init error: {0}")]
    InitError(String),
    /// Frame rendering failed
    #[error("Frame error: {0}")]
    FrameError(String),
    /// Terminal-specific error
    #[error("Terminal error: {0}")]
    TerminalError(#[from] std::io::Error),
}

/// Backend rendering trait for popover hosts
///
/// Coordinates are root-relative cells. Drawing outside the surface is
/// clipped silently.
pub trait RenderBackend {
    /// Get surface capabilities
    fn capabilities(&self) -> SurfaceCapabilities;

    /// Begin a new render frame
    fn begin_frame(&mut self) -> Result<(), RenderError>;

    /// End frame and present to display
    fn end_frame(&mut self) -> Result<(), RenderError>;

    /// Clear the render surface with a color
    fn clear(&mut self, color: Color);

    /// Draw a bordered box covering `rect`
    fn draw_box(&mut self, rect: Rect, color: Color, alpha: f32);

    /// Draw a single line of text starting at (x, y), clipped to `max_width` cells
    fn draw_text(&mut self, x: i32, y: i32, text: &str, max_width: i32, color: Color, alpha: f32);

    /// Draw a host asset stretched over `rect`
    fn draw_asset(&mut self, asset: &AssetHandle, rect: Rect, color: Color, alpha: f32);
}

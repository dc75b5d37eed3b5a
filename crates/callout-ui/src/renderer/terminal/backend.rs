//! Terminal backend implementation

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use tracing::debug;

use crate::assets::AssetHandle;
use crate::geometry::Rect;
use crate::renderer::buffer::CellBuffer;
use crate::renderer::{Color, RenderBackend, RenderError, SurfaceCapabilities};

/// Terminal rendering backend with diff output
pub struct TerminalBackend {
    /// Frame being drawn
    buffer: CellBuffer,
    /// Previous frame buffer for diff rendering
    prev_buffer: CellBuffer,
    /// Forces a full repaint on the next flush
    dirty: bool,
}

impl TerminalBackend {
    /// Create a new terminal backend sized to the current terminal
    pub fn new() -> Result<Self, RenderError> {
        let (width, height) =
            terminal::size().map_err(|e| RenderError::InitError(e.to_string()))?;

        Ok(Self {
            buffer: CellBuffer::new(width, height),
            prev_buffer: CellBuffer::new(width, height),
            dirty: true,
        })
    }

    /// Refresh terminal size
    pub fn refresh_size(&mut self) -> Result<(), RenderError> {
        let (width, height) = terminal::size()?;

        if width != self.buffer.width() || height != self.buffer.height() {
            debug!(width, height, "Terminal resized");
            self.buffer.resize(width, height);
            self.prev_buffer.resize(width, height);
            self.dirty = true;
        }

        Ok(())
    }

    /// Register the glyph drawn for a named asset
    pub fn register_glyph(&mut self, asset: impl Into<String>, glyph: char) {
        let asset = asset.into();
        self.buffer.register_glyph(asset.clone(), glyph);
        self.prev_buffer.register_glyph(asset, glyph);
    }
}

impl RenderBackend for TerminalBackend {
    fn capabilities(&self) -> SurfaceCapabilities {
        self.buffer.capabilities()
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        self.refresh_size()?;

        // Swap buffers
        std::mem::swap(&mut self.buffer, &mut self.prev_buffer);
        self.buffer.begin_frame()
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        let mut stdout = io::stdout();
        let width = self.buffer.width() as usize;

        // Hide cursor during rendering
        queue!(stdout, cursor::Hide).map_err(|e| RenderError::FrameError(e.to_string()))?;

        // Diff render - only update changed cells
        let cells = self.buffer.cells().iter();
        let prev = self.prev_buffer.cells().iter();
        for (idx, (cell, old)) in cells.zip(prev).enumerate() {
            if !self.dirty && cell == old {
                continue;
            }
            let (x, y) = ((idx % width) as u16, (idx / width) as u16);
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(cell.fg.to_crossterm()),
                SetBackgroundColor(cell.bg.to_crossterm()),
                Print(cell.symbol)
            )
            .map_err(|e| RenderError::FrameError(e.to_string()))?;
        }
        self.dirty = false;

        stdout
            .flush()
            .map_err(|e| RenderError::FrameError(e.to_string()))?;

        Ok(())
    }

    fn clear(&mut self, color: Color) {
        self.buffer.clear(color);
    }

    fn draw_box(&mut self, rect: Rect, color: Color, alpha: f32) {
        self.buffer.draw_box(rect, color, alpha);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, max_width: i32, color: Color, alpha: f32) {
        self.buffer.draw_text(x, y, text, max_width, color, alpha);
    }

    fn draw_asset(&mut self, asset: &AssetHandle, rect: Rect, color: Color, alpha: f32) {
        self.buffer.draw_asset(asset, rect, color, alpha);
    }
}

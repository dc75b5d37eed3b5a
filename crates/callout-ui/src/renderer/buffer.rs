//! In-memory cell buffer
//!
//! Backs the terminal backend and doubles as a headless backend for tests.

use std::collections::HashMap;

use unicode_width::UnicodeWidthChar;

use super::backend::{RenderBackend, RenderError};
use super::surface::{Color, SurfaceCapabilities};
use crate::assets::AssetHandle;
use crate::geometry::Rect;

/// Below this opacity nothing is drawn
const MIN_VISIBLE_ALPHA: f32 = 0.05;

/// Glyph used for assets with no registered glyph
const FALLBACK_GLYPH: char = '▒';

/// One terminal cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: Color::White,
            bg: Color::BACKDROP,
        }
    }
}

/// Grid of cells with clipped drawing primitives
#[derive(Debug, Clone)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    clear_color: Color,
    glyphs: HashMap<String, char>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let glyphs = [
            ("popover.arrow.up", '▲'),
            ("popover.arrow.down", '▼'),
            ("popover.arrow.left", '◀'),
            ("popover.arrow.right", '▶'),
            ("popover.background", ' '),
        ]
        .into_iter()
        .map(|(name, glyph)| (name.to_string(), glyph))
        .collect();

        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            clear_color: Color::BACKDROP,
            glyphs,
        }
    }

    /// Register the glyph drawn for a named asset
    pub fn register_glyph(&mut self, asset: impl Into<String>, glyph: char) {
        self.glyphs.insert(asset.into(), glyph);
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, discarding contents
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); width as usize * height as usize];
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row contents as a string, for assertions and debugging
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width as i32)
            .filter_map(|x| self.cell(x, y))
            .map(|cell| cell.symbol)
            .collect()
    }

    fn set(&mut self, x: i32, y: i32, symbol: char, fg: Color) {
        if let Some(idx) = self.index(x, y) {
            let cell = &mut self.cells[idx];
            cell.symbol = symbol;
            cell.fg = fg;
        }
    }

    fn fill(&mut self, rect: Rect, symbol: char, fg: Color) {
        for y in rect.top..rect.bottom {
            for x in rect.left..rect.right {
                self.set(x, y, symbol, fg);
            }
        }
    }
}

impl RenderBackend for CellBuffer {
    fn capabilities(&self) -> SurfaceCapabilities {
        SurfaceCapabilities {
            width: self.width,
            height: self.height,
            supports_rgb: true,
        }
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        let color = self.clear_color;
        self.clear(color);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        for cell in &mut self.cells {
            *cell = Cell {
                symbol: ' ',
                fg: Color::White,
                bg: color,
            };
        }
    }

    fn draw_box(&mut self, rect: Rect, color: Color, alpha: f32) {
        if alpha < MIN_VISIBLE_ALPHA || rect.is_empty() {
            return;
        }
        let fg = color.with_opacity(alpha);
        let (right, bottom) = (rect.right - 1, rect.bottom - 1);

        for y in rect.top..rect.bottom {
            for x in rect.left..rect.right {
                let symbol = match (x, y) {
                    _ if rect.width() == 1 || rect.height() == 1 => '■',
                    (x, y) if x == rect.left && y == rect.top => '┌',
                    (x, y) if x == right && y == rect.top => '┐',
                    (x, y) if x == rect.left && y == bottom => '└',
                    (x, y) if x == right && y == bottom => '┘',
                    (_, y) if y == rect.top || y == bottom => '─',
                    (x, _) if x == rect.left || x == right => '│',
                    _ => ' ',
                };
                self.set(x, y, symbol, fg);
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, max_width: i32, color: Color, alpha: f32) {
        if alpha < MIN_VISIBLE_ALPHA {
            return;
        }
        let fg = color.with_opacity(alpha);
        let mut used = 0;

        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            if used + w > max_width {
                break;
            }
            self.set(x + used, y, ch, fg);
            // Wide glyphs occupy a trailing blank cell
            if w == 2 {
                self.set(x + used + 1, y, ' ', fg);
            }
            used += w;
        }
    }

    fn draw_asset(&mut self, asset: &AssetHandle, rect: Rect, color: Color, alpha: f32) {
        if alpha < MIN_VISIBLE_ALPHA || rect.is_empty() {
            return;
        }
        let glyph = self
            .glyphs
            .get(&asset.name)
            .copied()
            .unwrap_or(FALLBACK_GLYPH);
        self.fill(rect, glyph, color.with_opacity(alpha));
    }
}

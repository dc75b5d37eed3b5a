//! Rendering surface capabilities and color types

/// Rendering surface capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceCapabilities {
    /// Width in cells
    pub width: u16,
    /// Height in cells
    pub height: u16,
    /// Supports true color RGB output
    pub supports_rgb: bool,
}

impl Default for SurfaceCapabilities {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            supports_rgb: true,
        }
    }
}

/// Color representation supporting multiple formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Reset to default
    #[default]
    Reset,
    /// Standard ANSI color
    Black,
    DarkGrey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
    /// True color RGB
    Rgb(u8, u8, u8),
}

impl Color {
    pub const POPOVER_BORDER: Self = Color::Rgb(192, 192, 192);
    pub const POPOVER_TEXT: Self = Color::White;
    pub const POPOVER_ARROW: Self = Color::Rgb(218, 165, 32);
    pub const BACKDROP: Self = Color::Rgb(5, 7, 12);

    /// Convert to crossterm color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        match self {
            Color::Reset => crossterm::style::Color::Reset,
            Color::Black => crossterm::style::Color::Black,
            Color::DarkGrey => crossterm::style::Color::DarkGrey,
            Color::Red => crossterm::style::Color::Red,
            Color::Green => crossterm::style::Color::Green,
            Color::Yellow => crossterm::style::Color::Yellow,
            Color::Blue => crossterm::style::Color::Blue,
            Color::Magenta => crossterm::style::Color::Magenta,
            Color::Cyan => crossterm::style::Color::Cyan,
            Color::White => crossterm::style::Color::White,
            Color::Grey => crossterm::style::Color::Grey,
            Color::Rgb(r, g, b) => crossterm::style::Color::Rgb {
                r: *r,
                g: *g,
                b: *b,
            },
        }
    }

    /// Blend two colors with alpha (0.0 = self, 1.0 = other)
    pub fn blend(&self, other: &Color, alpha: f32) -> Color {
        match (self.to_rgb(), other.to_rgb()) {
            (Some((r1, g1, b1)), Some((r2, g2, b2))) => {
                let mix = |a: u8, b: u8| (a as f32 * (1.0 - alpha) + b as f32 * alpha) as u8;
                Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
            }
            _ => {
                if alpha > 0.5 {
                    *other
                } else {
                    *self
                }
            }
        }
    }

    /// Color as seen at `alpha` opacity over the backdrop
    pub fn with_opacity(&self, alpha: f32) -> Color {
        Color::BACKDROP.blend(self, alpha.clamp(0.0, 1.0))
    }

    /// Convert to RGB tuple if possible
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb(r, g, b) => Some((*r, *g, *b)),
            Color::Black => Some((0, 0, 0)),
            Color::White => Some((255, 255, 255)),
            Color::Red => Some((255, 0, 0)),
            Color::Green => Some((0, 255, 0)),
            Color::Blue => Some((0, 0, 255)),
            Color::Yellow => Some((255, 255, 0)),
            Color::Cyan => Some((0, 255, 255)),
            Color::Magenta => Some((255, 0, 255)),
            Color::Grey => Some((128, 128, 128)),
            Color::DarkGrey => Some((64, 64, 64)),
            Color::Reset => None,
        }
    }
}

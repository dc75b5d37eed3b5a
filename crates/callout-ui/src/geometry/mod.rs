//! Integer geometry primitives for popover layout
//!
//! All coordinates are in host units (pixels on a touch screen, cells in a
//! terminal). The y axis grows downward:
//! - X: Left (0) / Right (+)
//! - Y: Top (0) / Bottom (+)

mod insets;
mod rect;
mod size;

pub use insets::Insets;
pub use rect::Rect;
pub use size::Size;

//! Edge insets (padding)

use super::Size;

/// Padding applied on each edge of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    /// Grow a desired content size by this padding.
    ///
    /// Zero (fill) components are left at zero so the fill sentinel survives.
    pub fn pad(&self, content: Size) -> Size {
        let grow = |value: i32, extra: i32| if value > 0 { value + extra } else { 0 };
        Size::new(
            grow(content.width, self.horizontal()),
            grow(content.height, self.vertical()),
        )
    }
}

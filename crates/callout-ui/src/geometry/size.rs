//! Width/height pairs

/// A two-dimensional extent
///
/// Used both for concrete sizes and for the desired popover content size,
/// where a zero component means "fill whatever space is available".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// The fill-available sentinel
    pub const FILL: Self = Self::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Limit each component of `available` by this size.
    ///
    /// Components that are not positive leave the available extent untouched.
    pub fn fit_within(&self, available: Size) -> Size {
        let fit = |desired: i32, avail: i32| {
            if desired > 0 && desired < avail {
                desired
            } else {
                avail
            }
        };
        Size::new(
            fit(self.width, available.width),
            fit(self.height, available.height),
        )
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

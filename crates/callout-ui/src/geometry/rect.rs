//! Axis-aligned integer rectangles

use std::fmt;

use super::Size;

/// An axis-aligned rectangle described by its four edges
///
/// `right` and `bottom` are exclusive, so `width = right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a rect from its edges
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rect from an origin and a size
    pub const fn from_origin_size(x: i32, y: i32, size: Size) -> Self {
        Self::new(x, y, x + size.width, y + size.height)
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub const fn origin(&self) -> (i32, i32) {
        (self.left, self.top)
    }

    /// Horizontal midpoint, rounded toward negative infinity
    pub const fn center_x(&self) -> i32 {
        (self.left + self.right) >> 1
    }

    /// Vertical midpoint, rounded toward negative infinity
    pub const fn center_y(&self) -> i32 {
        (self.top + self.bottom) >> 1
    }

    /// Area of the rect; degenerate rects have zero area
    pub fn area(&self) -> i64 {
        i64::from(self.width().max(0)) * i64::from(self.height().max(0))
    }

    /// True when the rect covers no area
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Check if a point lies inside the rect (right/bottom exclusive)
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Check if another rect lies entirely within this one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Translate the rect by an offset
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Express this rect relative to the top-left corner of `frame`
    pub const fn relative_to(&self, frame: &Rect) -> Self {
        self.offset(-frame.left, -frame.top)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_dimensions() {
        let rect = Rect::new(20, 40, 60, 60);
        assert_eq!(rect.width(), 40);
        assert_eq!(rect.height(), 20);
        assert_eq!(rect.center_x(), 40);
        assert_eq!(rect.center_y(), 50);
        assert_eq!(rect.area(), 800);
    }

    #[test]
    fn test_center_rounds_down() {
        let rect = Rect::new(-3, 0, 0, 3);
        assert_eq!(rect.center_x(), -2);
        assert_eq!(rect.center_y(), 1);
    }

    #[test]
    fn test_degenerate_area() {
        assert_eq!(Rect::new(10, 10, 10, 50).area(), 0);
        assert!(Rect::new(10, 10, 10, 50).is_empty());
        assert_eq!(Rect::new(10, 10, 5, 50).area(), 0);
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(0, 0));
        assert!(rect.contains(9, 9));
        assert!(!rect.contains(10, 5));
        assert!(rect.contains_rect(&Rect::new(2, 2, 10, 10)));
        assert!(!rect.contains_rect(&Rect::new(-1, 2, 5, 5)));
    }

    #[test]
    fn test_relative_to() {
        let frame = Rect::new(100, 50, 420, 530);
        let anchor = Rect::new(120, 90, 160, 110);
        assert_eq!(anchor.relative_to(&frame), Rect::new(20, 40, 60, 60));
    }
}

//! Arrow directions and direction sets
//!
//! A direction names the edge of the anchor the popover arrow points back
//! to. `Up` means the arrow points up into the anchor's bottom edge, so the
//! popover body hangs below the anchor.

use std::fmt;
use std::ops::BitOr;

use bitflags::bitflags;

use crate::error::PlacementError;

/// A single arrow direction
///
/// Declaration order is the canonical tie-break order used by the placement
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    Up,
    Down,
    Right,
    Left,
}

impl ArrowDirection {
    /// All directions in canonical order
    pub const ALL: [ArrowDirection; 4] = [
        ArrowDirection::Up,
        ArrowDirection::Down,
        ArrowDirection::Right,
        ArrowDirection::Left,
    ];

    /// The bit this direction occupies in an [`ArrowDirections`] mask
    pub const fn bits(self) -> u8 {
        self.flag().bits()
    }

    pub const fn flag(self) -> ArrowDirections {
        match self {
            ArrowDirection::Up => ArrowDirections::UP,
            ArrowDirection::Down => ArrowDirections::DOWN,
            ArrowDirection::Left => ArrowDirections::LEFT,
            ArrowDirection::Right => ArrowDirections::RIGHT,
        }
    }

    /// Whether the popover sits above or below the anchor
    pub const fn is_vertical(self) -> bool {
        matches!(self, ArrowDirection::Up | ArrowDirection::Down)
    }
}

impl fmt::Display for ArrowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArrowDirection::Up => "up",
            ArrowDirection::Down => "down",
            ArrowDirection::Right => "right",
            ArrowDirection::Left => "left",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// Set of permitted arrow directions
    ///
    /// Bit values are stable and may be persisted by callers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ArrowDirections: u8 {
        const UP = 0x01;
        const DOWN = 0x02;
        const LEFT = 0x04;
        const RIGHT = 0x08;
        const ANY = Self::UP.bits() | Self::DOWN.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl ArrowDirections {
    /// Decode a persisted mask, rejecting unknown bits
    pub fn try_from_bits(bits: u8) -> Result<Self, PlacementError> {
        Self::from_bits(bits).ok_or(PlacementError::InvalidBits(bits))
    }

    /// Whether `direction` is permitted by this set
    pub fn allows(&self, direction: ArrowDirection) -> bool {
        self.contains(direction.flag())
    }

    /// Permitted directions in canonical order
    pub fn directions(&self) -> impl Iterator<Item = ArrowDirection> + '_ {
        ArrowDirection::ALL
            .into_iter()
            .filter(move |direction| self.allows(*direction))
    }
}

impl Default for ArrowDirections {
    fn default() -> Self {
        ArrowDirections::ANY
    }
}

impl From<ArrowDirection> for ArrowDirections {
    fn from(direction: ArrowDirection) -> Self {
        direction.flag()
    }
}

impl BitOr for ArrowDirection {
    type Output = ArrowDirections;

    fn bitor(self, rhs: Self) -> ArrowDirections {
        self.flag() | rhs.flag()
    }
}

impl BitOr<ArrowDirection> for ArrowDirections {
    type Output = ArrowDirections;

    fn bitor(self, rhs: ArrowDirection) -> ArrowDirections {
        self | rhs.flag()
    }
}

//! Popover placement engine
//!
//! Pure geometry. Given the container frame and the anchor rect (both in the
//! same root-relative space), a desired content size and a set of permitted
//! arrow directions, the engine:
//! - computes one candidate rect per permitted direction,
//! - picks the candidate with the largest area (ties go to the earlier
//!   direction in `Up, Down, Right, Left` order),
//! - derives the arrow rect from the chosen direction and the anchor.
//!
//! Every rect it returns is local to the container (origin at the
//! container's top-left corner).

mod arrow;
mod engine;

pub use arrow::arrow_rect;
pub use engine::{best_placement, candidate_rect, candidates, PlacementCandidate};

use crate::direction::ArrowDirection;
use crate::geometry::Rect;

/// A resolved placement: the popover body plus its arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Direction the arrow points
    pub direction: ArrowDirection,
    /// Content box rect, container-local
    pub content: Rect,
    /// Arrow rect, container-local
    pub arrow: Rect,
}

//! Candidate computation and best-fit selection

use tracing::debug;

use crate::direction::{ArrowDirection, ArrowDirections};
use crate::error::PlacementError;
use crate::geometry::{Rect, Size};

/// The rect the popover body would occupy for a given direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCandidate {
    pub direction: ArrowDirection,
    pub rect: Rect,
}

impl PlacementCandidate {
    pub fn area(&self) -> i64 {
        self.rect.area()
    }
}

/// Anchor edges in container-local space, clamped into the container
struct LocalAnchor {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    center_x: i32,
    center_y: i32,
    width: i32,
    height: i32,
}

impl LocalAnchor {
    fn new(container: &Rect, anchor: &Rect) -> Self {
        let width = container.width().max(0);
        let height = container.height().max(0);
        let local = anchor.relative_to(container);

        Self {
            left: local.left.clamp(0, width),
            top: local.top.clamp(0, height),
            right: local.right.clamp(0, width),
            bottom: local.bottom.clamp(0, height),
            center_x: local.center_x(),
            center_y: local.center_y(),
            width,
            height,
        }
    }
}

/// Center `extent` on `center`, then keep it inside `[0, limit]`
fn centered(center: i32, extent: i32, limit: i32) -> i32 {
    (center - extent / 2).clamp(0, (limit - extent).max(0))
}

/// Compute the popover body rect for a single direction.
///
/// `content` is the effective content size (padding included); zero
/// components fill the available space along that axis.
pub fn candidate_rect(
    direction: ArrowDirection,
    container: &Rect,
    anchor: &Rect,
    content: Size,
) -> Rect {
    let a = LocalAnchor::new(container, anchor);

    match direction {
        ArrowDirection::Up => {
            let size = content.fit_within(Size::new(a.width, a.height - a.bottom));
            let x = centered(a.center_x, size.width, a.width);
            Rect::from_origin_size(x, a.bottom, size)
        }
        ArrowDirection::Down => {
            let size = content.fit_within(Size::new(a.width, a.top));
            let x = centered(a.center_x, size.width, a.width);
            Rect::from_origin_size(x, a.top - size.height, size)
        }
        ArrowDirection::Right => {
            let size = content.fit_within(Size::new(a.left, a.height));
            let y = centered(a.center_y, size.height, a.height);
            Rect::from_origin_size(a.left - size.width, y, size)
        }
        ArrowDirection::Left => {
            let size = content.fit_within(Size::new(a.width - a.right, a.height));
            let y = centered(a.center_y, size.height, a.height);
            Rect::from_origin_size(a.right, y, size)
        }
    }
}

/// Compute a candidate for every permitted direction, in canonical order
pub fn candidates(
    container: &Rect,
    anchor: &Rect,
    content: Size,
    directions: ArrowDirections,
) -> Vec<PlacementCandidate> {
    directions
        .directions()
        .map(|direction| PlacementCandidate {
            direction,
            rect: candidate_rect(direction, container, anchor, content),
        })
        .collect()
}

/// Pick the permitted candidate with the largest area.
///
/// Every permitted direction is evaluated; on equal areas the first direction
/// in canonical order wins.
pub fn best_placement(
    container: &Rect,
    anchor: &Rect,
    content: Size,
    directions: ArrowDirections,
) -> Result<PlacementCandidate, PlacementError> {
    let best = candidates(container, anchor, content, directions)
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.area() > best.area() {
                candidate
            } else {
                best
            }
        })
        .ok_or(PlacementError::NoDirections)?;

    debug!(
        direction = %best.direction,
        rect = %best.rect,
        area = best.area(),
        "Selected popover placement"
    );

    Ok(best)
}

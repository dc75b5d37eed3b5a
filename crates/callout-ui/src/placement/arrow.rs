//! Arrow position derived from the chosen direction

use crate::direction::ArrowDirection;
use crate::geometry::{Rect, Size};

/// Compute the container-local rect of the arrow for `direction`.
///
/// The arrow hugs the anchor edge it points at and is centred on the anchor
/// along the other axis. Content size plays no part.
pub fn arrow_rect(
    direction: ArrowDirection,
    container: &Rect,
    anchor: &Rect,
    arrow: Size,
) -> Rect {
    let local = anchor.relative_to(container);

    let (x, y) = match direction {
        ArrowDirection::Up => (local.center_x() - arrow.width / 2, local.bottom),
        ArrowDirection::Down => (local.center_x() - arrow.width / 2, local.top - arrow.height),
        ArrowDirection::Right => (local.left - arrow.width, local.center_y() - arrow.height / 2),
        ArrowDirection::Left => (local.right, local.center_y() - arrow.height / 2),
    };

    Rect::from_origin_size(x, y, arrow)
}

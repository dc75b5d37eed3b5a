//! Animation primitives driven by host ticks
//!
//! Nothing here owns a clock: the host advances animations by calling
//! `update(dt)` from its frame loop.

mod easing;
mod fade;
mod tween;

pub use easing::Easing;
pub use fade::{FadeOutcome, FadeState, FadeTransition};
pub use tween::Tween;

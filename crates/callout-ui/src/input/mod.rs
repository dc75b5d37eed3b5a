//! Input abstraction for popover hosts
//!
//! Terminal key and mouse input is folded into [`UiEvent`]s, with a movable
//! cursor standing in for touch on keyboards.

mod event;
mod simulator;

pub use event::UiEvent;
pub use simulator::TouchSimulator;

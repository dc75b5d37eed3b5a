//! Widgets
//!
//! The [`Popover`] is the main one: it places itself next to an anchor,
//! attaches to a container, fades in and out and reports each step to an
//! optional [`PopoverObserver`].

mod content;
mod observer;
mod popover;
mod traits;

pub use content::PopoverContent;
pub use observer::PopoverObserver;
pub use popover::{Popover, PopoverState};
pub use traits::Widget;

//! callout-ui: popovers that point at things
//!
//! This crate provides:
//! - Integer geometry (`Rect`, `Size`, `Insets`) in root-relative space
//! - A pure placement engine that picks the roomiest side of an anchor
//! - A popover lifecycle controller with fade animations and observer hooks
//! - Container and screen element abstractions for hosts
//! - Render backends (in-memory cell buffer and terminal)
//! - A small terminal app framework with touch simulation

pub mod animation;
pub mod app;
pub mod assets;
pub mod container;
pub mod defaults;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod input;
pub mod placement;
pub mod renderer;
pub mod widget;

// Re-export commonly used types
pub use animation::{Easing, FadeTransition};
pub use app::{App, AppRunner};
pub use assets::{AssetHandle, PopoverAssets};
pub use container::{
    frame_for_element, Attachment, Container, ContainerRef, OverlayLayer, OwnerId, ScreenElement,
};
pub use defaults::PopoverDefaults;
pub use direction::{ArrowDirection, ArrowDirections};
pub use error::{PlacementError, PopoverError, Result};
pub use geometry::{Insets, Rect, Size};
pub use input::UiEvent;
pub use placement::{best_placement, Placement, PlacementCandidate};
pub use renderer::{CellBuffer, Color, RenderBackend, RenderError};
pub use widget::{Popover, PopoverContent, PopoverObserver, PopoverState, Widget};

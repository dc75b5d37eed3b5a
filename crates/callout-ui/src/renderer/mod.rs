//! Rendering backend abstraction for popover hosts
//!
//! Provides a trait-based abstraction over different rendering backends:
//! - In-memory cell buffer for headless hosts and tests
//! - Terminal backend with diff rendering

mod backend;
mod buffer;
mod surface;
pub mod terminal;

pub use backend::{RenderBackend, RenderError};
pub use buffer::{Cell, CellBuffer};
pub use surface::{Color, SurfaceCapabilities};

//! Terminal application framework
//!
//! Runs an [`App`] against the terminal backend: raw mode, alternate screen,
//! mouse capture, a fixed tick for animations and diff-rendered frames.

mod framework;

pub use framework::{App, AppRunner};

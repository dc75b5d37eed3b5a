//! Terminal backend for running popovers in a plain terminal

mod backend;

pub use backend::TerminalBackend;

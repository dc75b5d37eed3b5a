//! callout: popovers that point at things
//!
//! Re-exports the popover engine from `callout-ui` and its settings from
//! `callout-config`.

pub mod config {
    pub use callout_config::*;
}

pub use callout_ui::*;

//! Configuration management for callout popovers.
//!
//! Settings are stored as TOML. The file lives in the platform config
//! directory (`callout/callout.toml`) unless a path is given explicitly.
//! A missing file yields the built-in defaults; a malformed file is an error.
//!
//! ```toml
//! [popover]
//! fade_ms = 300
//! easing = "linear"
//! content_width = 0
//! content_height = 0
//! padding = [1, 1, 1, 1]
//!
//! [assets.arrow_up]
//! name = "popover.arrow.up"
//! width = 1
//! height = 1
//! ```

mod settings;

pub use settings::{AssetSettings, AssetSpec, CalloutSettings, PopoverSettings};

use std::path::PathBuf;

/// Errors raised while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

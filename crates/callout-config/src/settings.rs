// Popover settings
// Loaded from <config dir>/callout/callout.toml

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{ConfigError, Result};

const CONFIG_FILE: &str = "callout.toml";

/// Named asset with its intrinsic size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpec {
    pub name: String,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
}

impl AssetSpec {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Background and arrow assets used by every new popover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub background: AssetSpec,
    pub arrow_up: AssetSpec,
    pub arrow_down: AssetSpec,
    pub arrow_left: AssetSpec,
    pub arrow_right: AssetSpec,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            background: AssetSpec::new("popover.background", 0, 0),
            arrow_up: AssetSpec::new("popover.arrow.up", 1, 1),
            arrow_down: AssetSpec::new("popover.arrow.down", 1, 1),
            arrow_left: AssetSpec::new("popover.arrow.left", 1, 1),
            arrow_right: AssetSpec::new("popover.arrow.right", 1, 1),
        }
    }
}

/// Popover behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopoverSettings {
    /// Fade animation length in milliseconds
    pub fade_ms: u64,

    /// Easing curve name (kebab-case, e.g. "ease-out-quad")
    pub easing: String,

    /// Desired content width; 0 fills the available width
    pub content_width: i32,

    /// Desired content height; 0 fills the available height
    pub content_height: i32,

    /// Content box padding as [left, top, right, bottom]
    pub padding: [i32; 4],
}

impl Default for PopoverSettings {
    fn default() -> Self {
        Self {
            fade_ms: 300,
            easing: "linear".to_string(),
            content_width: 0,
            content_height: 0,
            padding: [1, 1, 1, 1],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalloutSettings {
    pub popover: PopoverSettings,
    pub assets: AssetSettings,
}

impl CalloutSettings {
    /// Default settings file location, if the platform has a config dir
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "callout").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "Loaded popover settings");
        Ok(settings)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml_string()?).map_err(io_err)?;
        info!(path = %path.display(), "Saved popover settings");
        Ok(())
    }
}

//! Process-wide popover defaults
//!
//! Popovers copy the current defaults once, at construction. Installing new
//! defaults later never touches popovers that already exist.

use std::sync::{OnceLock, PoisonError, RwLock};
use std::time::Duration;

use callout_config::CalloutSettings;
use tracing::{debug, warn};

use crate::animation::Easing;
use crate::assets::PopoverAssets;
use crate::geometry::{Insets, Size};

static DEFAULTS: OnceLock<RwLock<PopoverDefaults>> = OnceLock::new();

fn registry() -> &'static RwLock<PopoverDefaults> {
    DEFAULTS.get_or_init(|| RwLock::new(PopoverDefaults::default()))
}

/// Values every new popover starts from
#[derive(Debug, Clone, PartialEq)]
pub struct PopoverDefaults {
    pub fade_duration: Duration,
    pub easing: Easing,
    pub content_size: Size,
    pub padding: Insets,
    pub assets: PopoverAssets,
}

impl Default for PopoverDefaults {
    fn default() -> Self {
        Self::from_settings(&CalloutSettings::default())
    }
}

impl PopoverDefaults {
    /// Build defaults from loaded settings
    pub fn from_settings(settings: &CalloutSettings) -> Self {
        let popover = &settings.popover;
        let easing = Easing::from_name(&popover.easing).unwrap_or_else(|| {
            warn!(easing = %popover.easing, "Unknown easing in settings, using linear");
            Easing::Linear
        });
        let [left, top, right, bottom] = popover.padding;

        Self {
            fade_duration: Duration::from_millis(popover.fade_ms),
            easing,
            content_size: Size::new(popover.content_width, popover.content_height),
            padding: Insets::new(left, top, right, bottom),
            assets: PopoverAssets::from(&settings.assets),
        }
    }

    /// Replace the process-wide defaults
    pub fn install(defaults: PopoverDefaults) {
        debug!(?defaults, "Installing popover defaults");
        *registry().write().unwrap_or_else(PoisonError::into_inner) = defaults;
    }

    /// Snapshot of the process-wide defaults
    pub fn current() -> PopoverDefaults {
        registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

//! Opaque asset handles for popover chrome
//!
//! Loading and drawing the actual images is the host's business; the popover
//! only needs a name to hand back and the intrinsic size for layout.

use callout_config::{AssetSettings, AssetSpec};

use crate::direction::ArrowDirection;
use crate::geometry::Size;

/// Reference to a host-provided image
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetHandle {
    pub name: String,
    pub size: Size,
}

impl AssetHandle {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl From<&AssetSpec> for AssetHandle {
    fn from(spec: &AssetSpec) -> Self {
        Self::new(spec.name.clone(), Size::new(spec.width, spec.height))
    }
}

/// Background plus one arrow per direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopoverAssets {
    pub background: AssetHandle,
    pub arrow_up: AssetHandle,
    pub arrow_down: AssetHandle,
    pub arrow_left: AssetHandle,
    pub arrow_right: AssetHandle,
}

impl PopoverAssets {
    /// The arrow asset drawn for `direction`
    pub fn arrow(&self, direction: ArrowDirection) -> &AssetHandle {
        match direction {
            ArrowDirection::Up => &self.arrow_up,
            ArrowDirection::Down => &self.arrow_down,
            ArrowDirection::Left => &self.arrow_left,
            ArrowDirection::Right => &self.arrow_right,
        }
    }

    pub fn set_arrow(&mut self, direction: ArrowDirection, handle: AssetHandle) {
        match direction {
            ArrowDirection::Up => self.arrow_up = handle,
            ArrowDirection::Down => self.arrow_down = handle,
            ArrowDirection::Left => self.arrow_left = handle,
            ArrowDirection::Right => self.arrow_right = handle,
        }
    }
}

impl From<&AssetSettings> for PopoverAssets {
    fn from(settings: &AssetSettings) -> Self {
        Self {
            background: (&settings.background).into(),
            arrow_up: (&settings.arrow_up).into(),
            arrow_down: (&settings.arrow_down).into(),
            arrow_left: (&settings.arrow_left).into(),
            arrow_right: (&settings.arrow_right).into(),
        }
    }
}

impl Default for PopoverAssets {
    fn default() -> Self {
        Self::from(&AssetSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_selected_by_direction() {
        let mut assets = PopoverAssets::default();
        assets.set_arrow(ArrowDirection::Left, AssetHandle::new("chevron", Size::new(2, 3)));

        assert_eq!(assets.arrow(ArrowDirection::Left).name, "chevron");
        assert_eq!(assets.arrow(ArrowDirection::Left).size, Size::new(2, 3));
        assert_eq!(assets.arrow(ArrowDirection::Right).name, "popover.arrow.right");
    }
}

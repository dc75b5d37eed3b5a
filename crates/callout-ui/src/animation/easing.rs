//! Easing curves for opacity transitions

use std::f32::consts::PI;

/// Easing function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseOutCubic,
    EaseInOutSine,
}

impl Easing {
    /// Look up an easing by its kebab-case name (as written in config files)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Easing::Linear),
            "ease-in-quad" => Some(Easing::EaseInQuad),
            "ease-out-quad" => Some(Easing::EaseOutQuad),
            "ease-in-out-quad" => Some(Easing::EaseInOutQuad),
            "ease-out-cubic" => Some(Easing::EaseOutCubic),
            "ease-in-out-sine" => Some(Easing::EaseInOutSine),
            _ => None,
        }
    }

    /// Apply easing function to progress value (0-1)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseOutCubic => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::EaseInOutSine => -0.5 * ((PI * t).cos() - 1.0),
        }
    }
}

//! Tweening/interpolation

use std::time::Duration;

use super::Easing;

/// A scalar tween between two values
#[derive(Debug, Clone)]
pub struct Tween {
    /// Start value
    pub start: f32,
    /// End value
    pub end: f32,
    /// Duration
    pub duration: Duration,
    /// Current progress (0-1)
    pub progress: f32,
    /// Easing function
    pub easing: Easing,
    /// Whether the tween is complete
    pub complete: bool,
}

impl Tween {
    /// Create a new tween
    pub fn new(start: f32, end: f32, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            progress: 0.0,
            easing: Easing::Linear,
            complete: false,
        }
    }

    /// Set easing function
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance the tween. Returns true on the update that completes it.
    pub fn update(&mut self, dt: Duration) -> bool {
        if self.complete {
            return false;
        }

        if self.duration.is_zero() {
            self.progress = 1.0;
        } else {
            self.progress += dt.as_secs_f32() / self.duration.as_secs_f32();
        }

        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.complete = true;
            return true;
        }
        false
    }

    /// Get current value
    pub fn value(&self) -> f32 {
        let t = self.easing.apply(self.progress);
        self.start + (self.end - self.start) * t
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

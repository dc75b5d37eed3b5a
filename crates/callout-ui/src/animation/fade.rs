//! Fade transition effect

use std::time::Duration;

use super::{Easing, Tween};

/// Fade transition states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    Hidden,
    FadingIn,
    Visible,
    FadingOut,
}

/// Reported by [`FadeTransition::update`] on the tick a fade finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeOutcome {
    FadedIn,
    FadedOut,
}

/// Opacity fade between fully transparent and fully opaque
#[derive(Debug, Clone)]
pub struct FadeTransition {
    state: FadeState,
    tween: Option<Tween>,
    alpha: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self {
            state: FadeState::Hidden,
            tween: None,
            alpha: 0.0,
            duration: Duration::from_millis(300),
            easing: Easing::Linear,
        }
    }
}

impl FadeTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start fading from transparent to opaque
    pub fn fade_in(&mut self) {
        self.start(0.0, 1.0, FadeState::FadingIn);
    }

    /// Start fading from opaque to transparent
    pub fn fade_out(&mut self) {
        self.start(1.0, 0.0, FadeState::FadingOut);
    }

    /// Jump to fully opaque without animating
    pub fn show_now(&mut self) {
        self.settle(FadeState::Visible, 1.0);
    }

    /// Jump to fully transparent without animating
    pub fn hide_now(&mut self) {
        self.settle(FadeState::Hidden, 0.0);
    }

    fn start(&mut self, from: f32, to: f32, state: FadeState) {
        self.tween = Some(Tween::new(from, to, self.duration).with_easing(self.easing));
        self.alpha = from;
        self.state = state;
    }

    fn settle(&mut self, state: FadeState, alpha: f32) {
        self.tween = None;
        self.alpha = alpha;
        self.state = state;
    }

    /// Advance the running fade, if any
    pub fn update(&mut self, dt: Duration) -> Option<FadeOutcome> {
        let tween = self.tween.as_mut()?;
        let finished = tween.update(dt);
        self.alpha = tween.value();

        if !finished {
            return None;
        }

        match self.state {
            FadeState::FadingIn => {
                self.settle(FadeState::Visible, 1.0);
                Some(FadeOutcome::FadedIn)
            }
            FadeState::FadingOut => {
                self.settle(FadeState::Hidden, 0.0);
                Some(FadeOutcome::FadedOut)
            }
            _ => None,
        }
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, FadeState::FadingIn | FadeState::FadingOut)
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }
}

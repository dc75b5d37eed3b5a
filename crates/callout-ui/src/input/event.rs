//! Unified input events

use crossterm::event::KeyEvent;

/// Input event delivered to popovers and hosts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Touch or click at a root-relative point
    Tap {
        x: i32,
        y: i32,
    },

    /// Pointer moved without pressing
    Hover {
        x: i32,
        y: i32,
    },

    /// Fallback keyboard input
    Key(KeyEvent),

    /// Regular tick for animations
    Tick,

    /// Terminal/window resized
    Resize {
        width: u16,
        height: u16,
    },
}

impl UiEvent {
    /// Check if this is a tick event
    pub fn is_tick(&self) -> bool {
        matches!(self, UiEvent::Tick)
    }

    /// Check if this is a keyboard event
    pub fn is_key(&self) -> bool {
        matches!(self, UiEvent::Key(_))
    }

    /// Root-relative point of a tap, if this is one
    pub fn tap_point(&self) -> Option<(i32, i32)> {
        match self {
            UiEvent::Tap { x, y } => Some((*x, *y)),
            _ => None,
        }
    }
}

//! Error types for placement and popover operations.

/// Errors raised by the placement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("no arrow directions permitted")]
    NoDirections,

    #[error("invalid arrow direction bits: {0:#04x}")]
    InvalidBits(u8),
}

/// Errors raised by popover lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopoverError {
    #[error("placement failed: {0}")]
    Placement(#[from] PlacementError),

    #[error("container already holds another popover")]
    ContainerOccupied,
}

pub type Result<T> = std::result::Result<T, PopoverError>;

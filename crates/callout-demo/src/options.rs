//! Demo options and direction mask parsing

use callout_ui::{ArrowDirection, ArrowDirections, PlacementError};

/// Runtime switches for the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOptions {
    /// Directions popovers may open in
    pub directions: ArrowDirections,
    /// Fade popovers in and out
    pub animate: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            directions: ArrowDirections::ANY,
            animate: true,
        }
    }
}

/// Parse a direction mask given either as bits (`15`, `0x3`) or as a
/// comma separated list of names (`up,left`, `any`). Empty masks are
/// rejected.
pub fn parse_directions(input: &str) -> Result<ArrowDirections, String> {
    let mask = parse_mask(input.trim())?;
    if mask.is_empty() {
        return Err(PlacementError::NoDirections.to_string());
    }
    Ok(mask)
}

fn parse_mask(input: &str) -> Result<ArrowDirections, String> {
    let bits = match input.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => input.parse::<u8>().ok(),
    };
    if let Some(bits) = bits {
        return ArrowDirections::try_from_bits(bits).map_err(|e| e.to_string());
    }

    input
        .split(',')
        .map(|name| match name.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(ArrowDirection::Up.into()),
            "down" => Ok(ArrowDirection::Down.into()),
            "left" => Ok(ArrowDirection::Left.into()),
            "right" => Ok(ArrowDirection::Right.into()),
            "any" => Ok(ArrowDirections::ANY),
            other => Err(format!("unknown direction '{other}'")),
        })
        .try_fold(ArrowDirections::empty(), |mask, flag| {
            flag.map(|flag: ArrowDirections| mask | flag)
        })
}

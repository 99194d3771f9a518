//! Dart throw representation and display formatting.
//!
//! A throw is a dartboard segment value paired with a multiplier. The
//! numbered segments 1-20 can be hit as singles, doubles, or triples; the
//! outer bull (25), inner bull (50), and a miss (0) have no multiplier ring.

use crate::game::GameError;
use serde::{Deserialize, Serialize};

/// A single dart throw: segment value plus multiplier.
///
/// Construction goes through [`Throw::new`] (or the convenience
/// constructors), so a `Throw` always describes a real dartboard segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Throw {
    value: u8,
    multiplier: u8,
}

impl Throw {
    /// Outer bull segment value
    pub const OUTER_BULL: u8 = 25;

    /// Inner bull segment value
    pub const INNER_BULL: u8 = 50;

    /// Create a throw, validating the segment and multiplier.
    ///
    /// Valid values are 0 (miss), 1-20, 25, and 50. The multiplier must be
    /// 1-3 for numbered segments and exactly 1 for miss and bulls.
    pub fn new(value: u8, multiplier: u8) -> Result<Self, GameError> {
        let valid = match value {
            0 | Self::OUTER_BULL | Self::INNER_BULL => multiplier == 1,
            1..=20 => (1..=3).contains(&multiplier),
            _ => false,
        };

        if !valid {
            return Err(GameError::InvalidThrow { value, multiplier });
        }

        Ok(Self { value, multiplier })
    }

    /// A dart that missed the board entirely
    pub fn miss() -> Self {
        Self {
            value: 0,
            multiplier: 1,
        }
    }

    /// A single of the given segment
    pub fn single(value: u8) -> Result<Self, GameError> {
        Self::new(value, 1)
    }

    /// A double of the given segment
    pub fn double(value: u8) -> Result<Self, GameError> {
        Self::new(value, 2)
    }

    /// A triple of the given segment
    pub fn triple(value: u8) -> Result<Self, GameError> {
        Self::new(value, 3)
    }

    /// The segment value
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The multiplier (1, 2, or 3)
    pub fn multiplier(&self) -> u8 {
        self.multiplier
    }

    /// Points scored by this throw
    pub fn points(&self) -> u16 {
        u16::from(self.value) * u16::from(self.multiplier)
    }

    /// Display label for this throw (see [`format_throw`])
    pub fn label(&self) -> String {
        format_throw(self.value, self.multiplier)
    }
}

/// Format a throw for display in the turn history.
///
/// - `0` is a `"MISS"`
/// - Bulls are shown as their numeral (`"25"` / `"50"`)
/// - Singles are the bare numeral, doubles `"D{n}"`, triples `"T{n}"`
///
/// Unknown multipliers fall back to the bare numeral.
pub fn format_throw(value: u8, multiplier: u8) -> String {
    if value == 0 {
        return "MISS".to_string();
    }
    if value == Throw::OUTER_BULL || value == Throw::INNER_BULL {
        return value.to_string();
    }

    match multiplier {
        2 => format!("D{}", value),
        3 => format!("T{}", value),
        _ => value.to_string(),
    }
}

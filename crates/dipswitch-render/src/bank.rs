//! Switch positions and the LSB-first switch bank.
//!
//! Switch 1 (the leftmost slot) carries the least significant bit. A bank
//! built from address `5` at width 8 therefore reads `10100000`, the reverse
//! of the usual `00000101`.

use std::{fmt, str::FromStr};

use crate::errors::{RenderError, Result};

/// Position of a single switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchPosition {
    /// Lever away from the ON marking (bit 0).
    Off,
    /// Lever towards the ON marking (bit 1).
    On,
}

impl SwitchPosition {
    /// Position for a bit value.
    pub fn from_bit(bit: bool) -> Self {
        if bit { Self::On } else { Self::Off }
    }

    /// Whether the switch is ON.
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Bit-string symbol for this position.
    pub fn symbol(self) -> char {
        match self {
            Self::Off => '0',
            Self::On => '1',
        }
    }
}

/// Non-empty sequence of switch positions, least significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwitchBank {
    positions: Vec<SwitchPosition>,
}

impl SwitchBank {
    /// Largest bank whose value still fits in a `u64`.
    pub const MAX_SWITCHES: usize = 64;

    /// Build a bank from positions in slot order.
    ///
    /// # Errors
    ///
    /// - `Empty` if `positions` is empty
    /// - `TooManySwitches` if there are more than [`Self::MAX_SWITCHES`]
    pub fn new(positions: Vec<SwitchPosition>) -> Result<Self> {
        check_count(positions.len())?;
        Ok(Self { positions })
    }

    /// Encode `value` into `width` switches, least significant bit first.
    ///
    /// # Errors
    ///
    /// - `Empty` / `TooManySwitches` if `width` is outside `1..=64`
    /// - `ValueOutOfRange` if `value` needs more than `width` bits
    pub fn from_address(value: u64, width: usize) -> Result<Self> {
        check_count(width)?;
        if width < Self::MAX_SWITCHES && value >> width != 0 {
            return Err(RenderError::ValueOutOfRange { value, width });
        }

        let positions = (0..width).map(|bit| SwitchPosition::from_bit((value >> bit) & 1 == 1)).collect();
        Ok(Self { positions })
    }

    /// Number of switches in the bank.
    pub fn switch_count(&self) -> usize {
        self.positions.len()
    }

    /// Positions in slot order (switch 1 first).
    pub fn positions(&self) -> &[SwitchPosition] {
        &self.positions
    }

    /// Position of switch `number` (1-based, as printed under the slot).
    pub fn switch(&self, number: usize) -> Option<SwitchPosition> {
        number.checked_sub(1).and_then(|index| self.positions.get(index).copied())
    }

    /// Address encoded by the bank.
    pub fn value(&self) -> u64 {
        self.positions
            .iter()
            .enumerate()
            .filter(|(_, position)| position.is_on())
            .fold(0, |acc, (bit, _)| acc | (1 << bit))
    }
}

fn check_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(RenderError::Empty);
    }
    if count > SwitchBank::MAX_SWITCHES {
        return Err(RenderError::TooManySwitches { count, max: SwitchBank::MAX_SWITCHES });
    }
    Ok(())
}

impl FromStr for SwitchBank {
    type Err = RenderError;

    /// Parse a bit string in slot order, e.g. `"10100000"`.
    fn from_str(s: &str) -> Result<Self> {
        let positions = s
            .chars()
            .enumerate()
            .map(|(index, symbol)| match symbol {
                '0' => Ok(SwitchPosition::Off),
                '1' => Ok(SwitchPosition::On),
                _ => Err(RenderError::InvalidSymbol { index, symbol }),
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(positions)
    }
}

impl fmt::Display for SwitchBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.positions.iter().try_for_each(|position| write!(f, "{}", position.symbol()))
    }
}

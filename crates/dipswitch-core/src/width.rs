//! Supported switch bank widths.

use std::fmt;

/// Number of switches in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitWidth {
    /// 6 switches.
    Six,
    /// 8 switches. Used when no width has been chosen.
    #[default]
    Eight,
    /// 10 switches.
    Ten,
    /// 12 switches.
    Twelve,
}

impl BitWidth {
    /// All widths in the order they are offered.
    pub const ALL: [Self; 4] = [Self::Six, Self::Eight, Self::Ten, Self::Twelve];

    /// Number of switches.
    pub fn bits(self) -> u32 {
        match self {
            Self::Six => 6,
            Self::Eight => 8,
            Self::Ten => 10,
            Self::Twelve => 12,
        }
    }

    /// Largest address the bank can show, `2^bits - 1`.
    pub fn max_address(self) -> u64 {
        (1 << self.bits()) - 1
    }

    /// Width for a switch count, if supported.
    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|width| width.bits() == bits)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

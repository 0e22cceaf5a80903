//! Address validation.

use std::num::IntErrorKind;

use dipswitch_render::SwitchBank;

use crate::{error::AddressError, width::BitWidth};

/// Parse `text` as an address for a bank of `width` switches.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
/// Checks run in order: integer syntax, sign, then range. Values too large or
/// too small for any integer type are classified by their sign rather than as
/// malformed.
///
/// # Errors
///
/// - `Malformed` if `text` is not a base-10 integer
/// - `Negative` if the integer is below zero
/// - `TooLarge` if it exceeds `width.max_address()`
pub fn parse_address(text: &str, width: BitWidth) -> Result<SwitchBank, AddressError> {
    let max = width.max_address();

    let value = match text.trim().parse::<i128>() {
        Ok(value) => value,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::NegOverflow => AddressError::Negative,
                IntErrorKind::PosOverflow => AddressError::TooLarge { max },
                _ => AddressError::Malformed,
            });
        },
    };

    if value < 0 {
        return Err(AddressError::Negative);
    }

    let value = u64::try_from(value)
        .ok()
        .filter(|value| *value <= max)
        .ok_or(AddressError::TooLarge { max })?;

    SwitchBank::from_address(value, width.bits() as usize).map_err(AddressError::from)
}

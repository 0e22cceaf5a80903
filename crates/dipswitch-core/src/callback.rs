//! Button callback payloads.
//!
//! Buttons carry short string payloads: `lang_<code>` for a language choice
//! and `bits_<n>` for a switch count.

use std::{fmt, str::FromStr};

use crate::{error::CallbackError, locale::Language, width::BitWidth};

/// Payload prefix of language buttons.
pub const LANGUAGE_PREFIX: &str = "lang_";

/// Payload prefix of width buttons.
pub const WIDTH_PREFIX: &str = "bits_";

/// Decoded button payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackData {
    /// User picked a language.
    Language(Language),
    /// User picked a switch count.
    Width(BitWidth),
}

impl CallbackData {
    /// Decode a payload.
    ///
    /// # Errors
    ///
    /// - `UnknownPayload` if neither prefix matches
    /// - `UnknownLanguage` / `UnsupportedWidth` if the suffix is not an
    ///   offered option
    pub fn parse(payload: &str) -> Result<Self, CallbackError> {
        if let Some(code) = payload.strip_prefix(LANGUAGE_PREFIX) {
            return Language::from_code(code)
                .map(Self::Language)
                .ok_or_else(|| CallbackError::UnknownLanguage { code: code.to_owned() });
        }

        if let Some(value) = payload.strip_prefix(WIDTH_PREFIX) {
            return value
                .parse::<u32>()
                .ok()
                .and_then(BitWidth::from_bits)
                .map(Self::Width)
                .ok_or_else(|| CallbackError::UnsupportedWidth { value: value.to_owned() });
        }

        Err(CallbackError::UnknownPayload { payload: payload.to_owned() })
    }

    /// Encode as a button payload.
    pub fn payload(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CallbackData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Language(language) => write!(f, "{LANGUAGE_PREFIX}{}", language.code()),
            Self::Width(width) => write!(f, "{WIDTH_PREFIX}{}", width.bits()),
        }
    }
}

impl FromStr for CallbackData {
    type Err = CallbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language() {
        assert_eq!(CallbackData::parse("lang_ua"), Ok(CallbackData::Language(Language::Ukrainian)));
        assert_eq!(CallbackData::parse("lang_cz"), Ok(CallbackData::Language(Language::Czech)));
    }

    #[test]
    fn parse_width() {
        assert_eq!(CallbackData::parse("bits_6"), Ok(CallbackData::Width(BitWidth::Six)));
        assert_eq!(CallbackData::parse("bits_12"), Ok(CallbackData::Width(BitWidth::Twelve)));
    }

    #[test]
    fn payload_round_trip() {
        let all = Language::ALL
            .into_iter()
            .map(CallbackData::Language)
            .chain(BitWidth::ALL.into_iter().map(CallbackData::Width));
        for data in all {
            assert_eq!(data.payload().parse::<CallbackData>(), Ok(data));
        }
    }

    #[test]
    fn rejects_unknown_language() {
        assert_eq!(
            CallbackData::parse("lang_en"),
            Err(CallbackError::UnknownLanguage { code: "en".into() })
        );
    }

    #[test]
    fn rejects_unsupported_width() {
        assert!(matches!(
            CallbackData::parse("bits_7"),
            Err(CallbackError::UnsupportedWidth { .. })
        ));
        assert!(matches!(
            CallbackData::parse("bits_x"),
            Err(CallbackError::UnsupportedWidth { .. })
        ));
    }

    #[test]
    fn rejects_unknown_prefix() {
        assert!(matches!(CallbackData::parse("color_red"), Err(CallbackError::UnknownPayload { .. })));
        assert!(matches!(CallbackData::parse(""), Err(CallbackError::UnknownPayload { .. })));
    }
}

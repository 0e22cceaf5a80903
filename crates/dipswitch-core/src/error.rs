//! Error types for user input.

use dipswitch_render::RenderError;
use thiserror::Error;

/// Why an address message could not be turned into a switch bank image.
#[derive(Debug, Error)]
pub enum AddressError {
    /// Text is not a base-10 integer.
    #[error("not a valid integer")]
    Malformed,

    /// Integer is below zero.
    #[error("address cannot be negative")]
    Negative,

    /// Integer does not fit in the selected number of switches.
    #[error("address exceeds maximum {max}")]
    TooLarge {
        /// Largest address for the selected width.
        max: u64,
    },

    /// Building or encoding the image failed.
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// A button payload that does not match any known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallbackError {
    /// Payload has neither the language nor the width prefix.
    #[error("unrecognized callback payload {payload:?}")]
    UnknownPayload {
        /// Raw payload.
        payload: String,
    },

    /// Language prefix with an unsupported code.
    #[error("unsupported language code {code:?}")]
    UnknownLanguage {
        /// Code after the prefix.
        code: String,
    },

    /// Width prefix with an unsupported bit count.
    #[error("unsupported bit width {value:?}")]
    UnsupportedWidth {
        /// Text after the prefix.
        value: String,
    },
}

//! Error types for building switch banks and encoding images.

use thiserror::Error;

/// Result type alias for renderer operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors produced by the renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A switch bank needs at least one switch.
    #[error("switch bank must contain at least one switch")]
    Empty,

    /// A bit string contained something other than `0` or `1`.
    #[error("invalid switch symbol {symbol:?} at index {index}")]
    InvalidSymbol {
        /// Zero-based index of the offending character.
        index: usize,
        /// The offending character.
        symbol: char,
    },

    /// More switches than a `u64` address can describe.
    #[error("switch bank has {count} switches, at most {max} supported")]
    TooManySwitches {
        /// Requested number of switches.
        count: usize,
        /// Maximum supported number of switches.
        max: usize,
    },

    /// Address does not fit in the requested number of switches.
    #[error("value {value} does not fit in {width} switches")]
    ValueOutOfRange {
        /// Address value.
        value: u64,
        /// Number of switches requested.
        width: usize,
    },

    /// PNG encoding failed.
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

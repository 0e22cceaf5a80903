//! Rendering seam between the conversation and the image backend.

use dipswitch_render::{Result, SwitchBank, render_png};

/// Produces the image sent back for a valid address.
pub trait Renderer: Send + Sync {
    /// Encode `bank` as a PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be produced.
    fn render_png(&self, bank: &SwitchBank) -> Result<Vec<u8>>;
}

/// Production renderer backed by [`dipswitch_render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PngRenderer;

impl Renderer for PngRenderer {
    fn render_png(&self, bank: &SwitchBank) -> Result<Vec<u8>> {
        render_png(bank)
    }
}

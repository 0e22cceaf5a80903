//! DIP switch bank renderer.
//!
//! Turns a [`SwitchBank`] (a fixed-length sequence of ON/OFF switch positions,
//! least significant bit first) into a raster image of a red DIP switch
//! package: one framed slot per switch, the actuated half of each slot in
//! white, and the 1-based position printed under every slot.
//!
//! Rendering is a pure function of the bank. Geometry is fixed (see
//! [`layout`]) and glyphs come from the built-in `embedded-graphics` mono
//! fonts, so the same bank always produces the same pixels.
//!
//! # Components
//!
//! - [`bank`]: switch positions and the LSB-first bank type
//! - [`layout`]: slot, panel and label geometry
//! - [`canvas`]: RGB pixel buffer implementing `DrawTarget`, PNG encoding
//! - [`render`]: drawing the bank onto a canvas
//! - [`errors`]: error types
#![forbid(unsafe_code)]

pub mod bank;
pub mod canvas;
pub mod errors;
pub mod layout;
pub mod render;

pub use bank::{SwitchBank, SwitchPosition};
pub use canvas::SwitchBankImage;
pub use errors::{RenderError, Result};
pub use layout::Layout;
pub use render::{ACTUATED_COLOR, PANEL_COLOR, render, render_png};

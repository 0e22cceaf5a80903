//! RGB pixel buffer backing a rendered switch bank.
//!
//! [`SwitchBankImage`] wraps an [`RgbImage`] and implements
//! `embedded-graphics`' [`DrawTarget`], so the drawing code in
//! [`crate::render`] is written against the generic primitives API and the
//! result can be encoded straight to PNG.

use std::{convert::Infallible, io::Cursor};

use embedded_graphics::{Pixel, pixelcolor::Rgb888, prelude::*};
use image::{ImageFormat, Rgb, RgbImage};

use crate::{
    bank::{SwitchBank, SwitchPosition},
    errors::Result,
    layout::Layout,
    render::ACTUATED_COLOR,
};

/// A rendered switch bank.
#[derive(Debug, Clone)]
pub struct SwitchBankImage {
    layout: Layout,
    image: RgbImage,
}

impl SwitchBankImage {
    /// Blank canvas sized for `layout`, filled with `background`.
    pub fn blank(layout: Layout, background: Rgb888) -> Self {
        let size = layout.canvas_size();
        let image = RgbImage::from_pixel(size.width, size.height, to_rgb(background));
        Self { layout, image }
    }

    /// Geometry the image was drawn with.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at `point`, or `None` outside the canvas.
    pub fn pixel(&self, point: Point) -> Option<Rgb888> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        self.image.get_pixel_checked(x, y).map(|&Rgb([r, g, b])| Rgb888::new(r, g, b))
    }

    /// Read the switch positions back from the pixels.
    ///
    /// A slot is ON when the centre of its upper half shows the actuated
    /// color.
    pub fn positions(&self) -> Vec<SwitchPosition> {
        (0..self.layout.count())
            .map(|index| {
                let sample = self.layout.upper_half(index).center();
                SwitchPosition::from_bit(self.pixel(sample) == Some(ACTUATED_COLOR))
            })
            .collect()
    }

    /// Read the image back into a [`SwitchBank`].
    pub fn to_bank(&self) -> Result<SwitchBank> {
        SwitchBank::new(self.positions())
    }

    /// Encode as PNG.
    ///
    /// # Errors
    ///
    /// Returns `Encode` if the PNG encoder fails.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Underlying pixel buffer.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl OriginDimensions for SwitchBankImage {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for SwitchBankImage {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> std::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();
        for Pixel(point, color) in pixels {
            // Clip anything outside the canvas (the panel's bottom edge).
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x < width && y < height {
                self.image.put_pixel(x, y, to_rgb(color));
            }
        }
        Ok(())
    }
}

fn to_rgb(color: Rgb888) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

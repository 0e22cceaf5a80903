//! Drawing a switch bank.
//!
//! Every slot gets the same treatment: a black frame, then the actuated
//! color on one half and the panel color on the other. An ON switch has its
//! actuated half on top, next to the "ON" marking; an OFF switch has it at the
//! bottom.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13_BOLD},
    },
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
};

use crate::{
    bank::{SwitchBank, SwitchPosition},
    canvas::SwitchBankImage,
    errors::Result,
    layout::{BORDER_WIDTH, Layout},
};

/// Color of the switch package and of the unactuated half of each slot.
pub const PANEL_COLOR: Rgb888 = Rgb888::new(0xcc, 0x00, 0x00);

/// Color of the actuated half of each slot.
pub const ACTUATED_COLOR: Rgb888 = Rgb888::new(0xff, 0xff, 0xff);

const BACKGROUND_COLOR: Rgb888 = Rgb888::new(0xff, 0xff, 0xff);
const BORDER_COLOR: Rgb888 = Rgb888::new(0x00, 0x00, 0x00);
const LABEL_COLOR: Rgb888 = Rgb888::new(0xff, 0xff, 0xff);

/// Render `bank` into a new image.
pub fn render(bank: &SwitchBank) -> SwitchBankImage {
    let layout = Layout::for_bank(bank);
    let mut image = SwitchBankImage::blank(layout, BACKGROUND_COLOR);
    let Ok(()) = draw_bank(&mut image, &layout, bank);
    image
}

/// Render `bank` and encode it as PNG.
pub fn render_png(bank: &SwitchBank) -> Result<Vec<u8>> {
    render(bank).to_png()
}

/// Draw `bank` onto any RGB target using `layout`.
pub fn draw_bank<D>(target: &mut D, layout: &Layout, bank: &SwitchBank) -> std::result::Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    layout
        .panel()
        .into_styled(
            PrimitiveStyleBuilder::new()
                .fill_color(PANEL_COLOR)
                .stroke_color(BORDER_COLOR)
                .stroke_width(BORDER_WIDTH)
                .stroke_alignment(StrokeAlignment::Inside)
                .build(),
        )
        .draw(target)?;

    let top_left = TextStyleBuilder::new().baseline(Baseline::Top).build();
    let on_style = MonoTextStyle::new(&FONT_7X13_BOLD, LABEL_COLOR);
    Text::with_text_style("ON", layout.on_indicator(), on_style, top_left).draw(target)?;

    let frame = PrimitiveStyleBuilder::new()
        .stroke_color(BORDER_COLOR)
        .stroke_width(BORDER_WIDTH)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    let actuated = PrimitiveStyle::with_fill(ACTUATED_COLOR);
    let unactuated = PrimitiveStyle::with_fill(PANEL_COLOR);
    let label_style = MonoTextStyle::new(&FONT_6X10, LABEL_COLOR);
    let centered: TextStyle =
        TextStyleBuilder::new().alignment(Alignment::Center).baseline(Baseline::Top).build();

    for (index, position) in bank.positions().iter().enumerate() {
        layout.slot(index).into_styled(frame).draw(target)?;

        let (lever, rest) = match position {
            SwitchPosition::On => (layout.upper_half(index), layout.lower_half(index)),
            SwitchPosition::Off => (layout.lower_half(index), layout.upper_half(index)),
        };
        lever.into_styled(actuated).draw(target)?;
        rest.into_styled(unactuated).draw(target)?;

        let number = (index + 1).to_string();
        Text::with_text_style(&number, layout.label_anchor(index), label_style, centered)
            .draw(target)?;
    }

    Ok(())
}

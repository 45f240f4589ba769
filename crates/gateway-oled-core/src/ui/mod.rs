//! Display geometry, fonts and the small set of text helpers shared by pages.

use embedded_graphics::Drawable;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;

/// Display width in pixels
pub const DISPLAY_WIDTH_PX: u32 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT_PX: u32 = 64;

/// Font used for page titles and body rows
pub const SMALL_FONT: &MonoFont<'static> = &FONT_6X10;

/// Font used for the splash title
pub const LARGE_FONT: &MonoFont<'static> = &FONT_10X20;

/// Height of one text row in the small font
pub const ROW_HEIGHT_PX: u32 = 10;

/// Characters that fit on one row in the small font (128 / 6)
pub const LINE_CHARS: usize = 21;

/// Fixed-capacity text line, truncated to what fits on the display.
pub type TextLine = String<LINE_CHARS>;

/// Build a [`TextLine`] from `text`, dropping whatever does not fit.
pub fn fit_line(text: &str) -> TextLine {
    let mut line = TextLine::new();
    for c in text.chars() {
        if line.push(c).is_err() {
            break;
        }
    }
    line
}

/// Full-screen bounding rectangle.
pub fn screen_bounds() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX),
    )
}

/// Draw the inverted title bar used by list pages and return the y of the
/// first body row.
pub fn draw_title_bar<D>(display: &mut D, title: &str) -> Result<i32, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH_PX, ROW_HEIGHT_PX))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)?;

    Text::with_baseline(
        title,
        Point::zero(),
        MonoTextStyle::new(SMALL_FONT, BinaryColor::Off),
        Baseline::Top,
    )
    .draw(display)?;

    Ok(ROW_HEIGHT_PX as i32)
}

/// Draw one body row in the small font with its top-left corner at `(x, y)`.
pub fn draw_row<D>(display: &mut D, x: i32, y: i32, text: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(
        text,
        Point::new(x, y),
        MonoTextStyle::new(SMALL_FONT, BinaryColor::On),
        Baseline::Top,
    )
    .draw(display)?;
    Ok(())
}

/// Draw `text` horizontally centered on the display with its top edge at `y`.
pub fn draw_centered<D>(
    display: &mut D,
    font: &MonoFont<'static>,
    y: i32,
    text: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();

    Text::with_text_style(
        text,
        Point::new((DISPLAY_WIDTH_PX / 2) as i32, y),
        MonoTextStyle::new(font, BinaryColor::On),
        style,
    )
    .draw(display)?;
    Ok(())
}

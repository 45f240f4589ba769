//! Splash page
//!
//! Shown once at startup: a lit frame, the distribution title in the large
//! font and the OS version beneath it.

use embedded_graphics::Drawable;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::pages::constants::{
    SPLASH_BORDER_PX, SPLASH_TITLE_OFFSET_PX, SPLASH_VERSION_OFFSET_PX,
};
use crate::ui::{
    DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, LARGE_FONT, SMALL_FONT, draw_centered, screen_bounds,
};

/// Draw the splash screen. Always displayable.
pub fn draw<D>(display: &mut D, title: &str, version: &str) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    screen_bounds()
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)?;

    Rectangle::new(
        Point::new(SPLASH_BORDER_PX as i32, SPLASH_BORDER_PX as i32),
        Size::new(
            DISPLAY_WIDTH_PX - 2 * SPLASH_BORDER_PX,
            DISPLAY_HEIGHT_PX - 2 * SPLASH_BORDER_PX,
        ),
    )
    .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
    .draw(display)?;

    let center_y = (DISPLAY_HEIGHT_PX / 2) as i32;
    draw_centered(display, LARGE_FONT, center_y - SPLASH_TITLE_OFFSET_PX, title)?;
    draw_centered(
        display,
        SMALL_FONT,
        center_y + SPLASH_VERSION_OFFSET_PX,
        version.trim(),
    )?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn test_splash_has_frame_and_title() {
        let mut fb = FrameBuffer::new();
        assert!(draw(&mut fb, "RAKPiOS", "1.4.2").unwrap());

        // frame corners lit, area just inside the border dark
        assert_eq!(fb.pixel(0, 0), BinaryColor::On);
        assert_eq!(fb.pixel(127, 63), BinaryColor::On);
        assert_eq!(fb.pixel(5, 5), BinaryColor::Off);

        // title band (y 12..32) has text
        let title_band = Rectangle::new(Point::new(5, 12), Size::new(118, 20));
        assert!(fb.lit_in(&title_band) > 0);

        // version row (y 37..47) has text
        let version_band = Rectangle::new(Point::new(5, 37), Size::new(118, 10));
        assert!(fb.lit_in(&version_band) > 0);
    }

    #[test]
    fn test_missing_version_leaves_row_empty() {
        let mut fb = FrameBuffer::new();
        draw(&mut fb, "RAKPiOS", "").unwrap();
        let version_band = Rectangle::new(Point::new(5, 37), Size::new(118, 10));
        assert_eq!(fb.lit_in(&version_band), 0);
    }
}

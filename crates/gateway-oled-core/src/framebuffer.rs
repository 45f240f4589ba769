//! RAM framebuffer with per-pixel change detection.
//!
//! All page drawing targets this 1-bit buffer instead of the OLED. After a
//! tick has settled on a page, only the rectangular region containing changed
//! pixels is pushed to the sink's draw target.

use core::convert::Infallible;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

/// Total number of pixels in the framebuffer (128 x 64 = 8,192).
const PIXEL_COUNT: usize = DISPLAY_WIDTH_PX as usize * DISPLAY_HEIGHT_PX as usize;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    /// Expand the dirty region to include the given pixel coordinate.
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Create a new dirty rect covering a single pixel.
    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }
}

/// Heap-backed monochrome framebuffer implementing `DrawTarget<Color = BinaryColor>`.
///
/// Drawing outside the 128x64 area is clipped silently, which lets pages emit
/// more text rows than fit.
#[derive(Clone)]
pub struct FrameBuffer {
    pixels: Vec<BinaryColor>,
    dirty: Option<DirtyRect>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Allocate a new framebuffer with every pixel off.
    pub fn new() -> Self {
        Self {
            pixels: vec![BinaryColor::Off; PIXEL_COUNT],
            dirty: None,
        }
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: BinaryColor) {
        let idx = y * DISPLAY_WIDTH_PX as usize + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Read back a pixel. Coordinates outside the display read as `Off`.
    pub fn pixel(&self, x: i32, y: i32) -> BinaryColor {
        if x < 0 || y < 0 || x >= DISPLAY_WIDTH_PX as i32 || y >= DISPLAY_HEIGHT_PX as i32 {
            return BinaryColor::Off;
        }
        self.pixels[y as usize * DISPLAY_WIDTH_PX as usize + x as usize]
    }

    /// Number of lit pixels inside `area`.
    pub fn lit_in(&self, area: &Rectangle) -> usize {
        area.points()
            .filter(|p| self.pixel(p.x, p.y) == BinaryColor::On)
            .count()
    }

    /// Number of lit pixels on the whole display.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|c| c.is_on()).count()
    }

    /// Whether any pixel changed since the last flush.
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }

    /// Mark every pixel as changed, so the next flush rewrites the whole
    /// display. Used when a flush did not reach the panel.
    pub fn invalidate(&mut self) {
        self.dirty = Some(DirtyRect {
            min_x: 0,
            min_y: 0,
            max_x: DISPLAY_WIDTH_PX as usize - 1,
            max_y: DISPLAY_HEIGHT_PX as usize - 1,
        });
    }

    /// Flush the dirty region to a display, then reset the dirty state.
    ///
    /// Only the bounding rectangle of changed pixels is written via
    /// `fill_contiguous`. If nothing changed, this is a no-op.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        let width = rect.max_x - rect.min_x + 1;
        let height = rect.max_y - rect.min_y + 1;

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            width, height, rect.min_x, rect.min_y
        );

        let area = Rectangle::new(
            Point::new(rect.min_x as i32, rect.min_y as i32),
            Size::new(width as u32, height as u32),
        );

        let pixels = &self.pixels;
        let stride = DISPLAY_WIDTH_PX as usize;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = DISPLAY_WIDTH_PX as usize;
        let h = DISPLAY_HEIGHT_PX as usize;

        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = DISPLAY_WIDTH_PX as i64;
        let h = DISPLAY_HEIGHT_PX as i64;

        let x0 = i64::from(area.top_left.x);
        let y0 = i64::from(area.top_left.y);
        let x_start = x0.clamp(0, w) as usize;
        let y_start = y0.clamp(0, h) as usize;
        let x_end = (x0 + i64::from(area.size.width)).clamp(0, w) as usize;
        let y_end = (y0 + i64::from(area.size.height)).clamp(0, h) as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let w = DISPLAY_WIDTH_PX as usize;
        let h = DISPLAY_HEIGHT_PX as usize;

        for y in 0..h {
            for x in 0..w {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    /// Draw target that records the last `fill_contiguous` area.
    struct Capture {
        area: Option<Rectangle>,
        lit: usize,
    }

    impl OriginDimensions for Capture {
        fn size(&self) -> Size {
            Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)
        }
    }

    impl DrawTarget for Capture {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Ok(())
        }

        fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Self::Color>,
        {
            self.area = Some(*area);
            self.lit = colors.into_iter().filter(|c| c.is_on()).count();
            Ok(())
        }
    }

    #[test]
    fn test_new_buffer_is_clean_and_dark() {
        let fb = FrameBuffer::new();
        assert!(!fb.is_dirty());
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut fb = FrameBuffer::new();
        Line::new(Point::new(-10, 5), Point::new(200, 5))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.lit_count(), DISPLAY_WIDTH_PX as usize);
        assert_eq!(fb.pixel(-1, 5), BinaryColor::Off);
    }

    #[test]
    fn test_flush_sends_only_dirty_region() {
        let mut fb = FrameBuffer::new();
        fb.fill_solid(
            &Rectangle::new(Point::new(10, 20), Size::new(3, 2)),
            BinaryColor::On,
        )
        .unwrap();

        let mut capture = Capture {
            area: None,
            lit: 0,
        };
        fb.flush(&mut capture).unwrap();

        assert_eq!(
            capture.area,
            Some(Rectangle::new(Point::new(10, 20), Size::new(3, 2)))
        );
        assert_eq!(capture.lit, 6);
        assert!(!fb.is_dirty());
    }

    #[test]
    fn test_redrawing_same_pixels_is_not_dirty() {
        let mut fb = FrameBuffer::new();
        let area = Rectangle::new(Point::new(0, 0), Size::new(4, 4));
        fb.fill_solid(&area, BinaryColor::On).unwrap();
        fb.flush(&mut Capture { area: None, lit: 0 }).unwrap();

        fb.fill_solid(&area, BinaryColor::On).unwrap();
        assert!(!fb.is_dirty());
        assert_eq!(fb.lit_in(&area), 16);
    }

    #[test]
    fn test_invalidate_flushes_whole_display() {
        let mut fb = FrameBuffer::new();
        fb.invalidate();

        let mut capture = Capture {
            area: None,
            lit: 0,
        };
        fb.flush(&mut capture).unwrap();
        assert_eq!(
            capture.area,
            Some(Rectangle::new(
                Point::zero(),
                Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)
            ))
        );
        assert!(!fb.is_dirty());
    }
}

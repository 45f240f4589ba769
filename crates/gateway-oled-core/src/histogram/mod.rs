//! Packet-rate histogram for the 128x64 display
//!
//! The metrics endpoint keeps a fixed number of time buckets. The chart shows
//! the most recent ones as bars, right-aligned to "now":
//!
//! 1. Bucket width is `ceil(width / requested)`, so no bar ever gets a
//!    fractional pixel.
//! 2. The effective bucket count is `floor(width / bucket_width)`, which can be
//!    smaller than requested but never overflows the bar area.
//! 3. Bars are scaled so the busiest bucket (`rx_max`) is
//!    [`AVAILABLE_HEIGHT_PX`] tall. With `rx_max == 0` only the axes are drawn.

use core::fmt::Write;

use embedded_graphics::Drawable;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::String;

use crate::metrics::MetricsSnapshot;
use crate::ui::draw_row;

mod axis;
pub mod constants;

pub use constants::{AVAILABLE_HEIGHT_PX, AVAILABLE_WIDTH_PX};
use constants::{BARS_START_X, BASELINE_Y, CAPTION_POS, MAX_CAPTION_LENGTH};

/// Width of a bar and how many bars fit in the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketGeometry {
    /// Pixel width of each bar
    pub bucket_width: u32,
    /// Number of bars actually drawn
    pub bucket_count: u32,
}

impl BucketGeometry {
    /// Fit `requested` buckets into `available_width` pixels.
    pub fn compute(available_width: u32, requested: u32) -> Self {
        if requested == 0 || available_width == 0 {
            return Self {
                bucket_width: 0,
                bucket_count: 0,
            };
        }

        let bucket_width = available_width.div_ceil(requested);
        let bucket_count = (available_width / bucket_width).min(requested);

        Self {
            bucket_width,
            bucket_count,
        }
    }

    /// Index of the oldest bucket shown when `requested` exist.
    pub fn first_index(&self, requested: u32) -> u32 {
        requested.saturating_sub(self.bucket_count)
    }
}

/// A histogram ready to be drawn from one metrics snapshot.
pub struct Histogram<'a> {
    metrics: &'a MetricsSnapshot,
    requested: u32,
    geometry: BucketGeometry,
}

impl<'a> Histogram<'a> {
    /// Lay out `requested` buckets over the standard bar area.
    pub fn new(metrics: &'a MetricsSnapshot, requested: u32) -> Self {
        Self::with_geometry(
            metrics,
            requested,
            BucketGeometry::compute(AVAILABLE_WIDTH_PX, requested),
        )
    }

    /// Use an explicit geometry. The bucket count is clamped to `requested`.
    pub fn with_geometry(
        metrics: &'a MetricsSnapshot,
        requested: u32,
        geometry: BucketGeometry,
    ) -> Self {
        Self {
            metrics,
            requested,
            geometry: BucketGeometry {
                bucket_width: geometry.bucket_width,
                bucket_count: geometry.bucket_count.min(requested),
            },
        }
    }

    /// Pixel height of each drawn bar, oldest first.
    pub fn bar_heights(&self) -> Vec<u32> {
        let rx_max = self.metrics.totals.rx_max;
        let first = self.geometry.first_index(self.requested);

        (0..self.geometry.bucket_count)
            .map(|i| {
                if rx_max == 0 {
                    return 0;
                }
                let unit = f64::from(AVAILABLE_HEIGHT_PX) / rx_max as f64;
                let rx = self.metrics.bucket(first + i).rx_count;
                ((rx as f64 * unit).round() as u32).min(AVAILABLE_HEIGHT_PX)
            })
            .collect()
    }

    /// Draw axes, bars and caption.
    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        axis::draw_axes(display)?;

        let rx_max = self.metrics.totals.rx_max;
        if rx_max == 0 {
            return Ok(());
        }

        let width = self.geometry.bucket_width;
        for (i, height) in self.bar_heights().into_iter().enumerate() {
            if height == 0 {
                continue;
            }
            let x = BARS_START_X + (i as u32 * width) as i32;
            Rectangle::new(
                Point::new(x, BASELINE_Y - height as i32),
                Size::new(width, height),
            )
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(display)?;
        }

        draw_row(display, CAPTION_POS.0, CAPTION_POS.1, &self.caption())
    }

    /// Top label, `SIZE:<drawn buckets> MAX:<rx_max>`.
    pub fn caption(&self) -> String<MAX_CAPTION_LENGTH> {
        let mut caption = String::new();
        // MAX_CAPTION_LENGTH fits the widest u32 and u64
        let _ = write!(
            caption,
            "SIZE:{} MAX:{}",
            self.geometry.bucket_count, self.metrics.totals.rx_max
        );
        caption
    }
}

//! LoRaWAN traffic page: the received-packet histogram.

use embedded_graphics::Drawable;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, StrokeAlignment};

use crate::histogram::Histogram;
use crate::metrics::MetricsSnapshot;
use crate::ui::screen_bounds;

/// Draw the histogram for `metrics`.
///
/// Without metrics the page draws an empty outline and reports itself as not
/// displayable, so the rotation moves on.
pub fn draw<D>(
    display: &mut D,
    metrics: Option<&MetricsSnapshot>,
    bucket_count: u32,
) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    match metrics {
        Some(metrics) => {
            Histogram::new(metrics, bucket_count).draw(display)?;
            Ok(true)
        }
        None => {
            let style = PrimitiveStyleBuilder::new()
                .stroke_color(BinaryColor::On)
                .stroke_width(1)
                .stroke_alignment(StrokeAlignment::Inside)
                .fill_color(BinaryColor::Off)
                .build();
            screen_bounds().into_styled(style).draw(display)?;
            Ok(false)
        }
    }
}

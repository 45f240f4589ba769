//! Count and time axes of the histogram

use embedded_graphics::Drawable;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use crate::ui::draw_row;

use super::constants::{
    ARROW_PX, AXIS_X, BASELINE_Y, TICK_PX, TICK_ROWS, TIME_LABEL_POS, X_AXIS_END,
};

fn stroke<D>(display: &mut D, from: (i32, i32), to: (i32, i32)) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(Point::new(from.0, from.1), Point::new(to.0, to.1))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)
}

/// Draw both axes with arrow heads, the `t` label and the count ticks.
pub(super) fn draw_axes<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    // y-axis: packet count per bucket
    stroke(display, (AXIS_X, 0), (AXIS_X, BASELINE_Y))?;
    stroke(display, (AXIS_X, 0), (AXIS_X - ARROW_PX, ARROW_PX))?;
    stroke(display, (AXIS_X, 0), (AXIS_X + ARROW_PX, ARROW_PX))?;

    // x-axis: time
    stroke(display, (AXIS_X, BASELINE_Y), (X_AXIS_END, BASELINE_Y))?;
    stroke(
        display,
        (X_AXIS_END - ARROW_PX, BASELINE_Y + ARROW_PX),
        (X_AXIS_END, BASELINE_Y),
    )?;
    stroke(
        display,
        (X_AXIS_END - ARROW_PX, BASELINE_Y - ARROW_PX),
        (X_AXIS_END, BASELINE_Y),
    )?;
    draw_row(display, TIME_LABEL_POS.0, TIME_LABEL_POS.1, "t")?;

    for y in TICK_ROWS {
        stroke(display, (AXIS_X, y), (AXIS_X + TICK_PX, y))?;
    }

    Ok(())
}

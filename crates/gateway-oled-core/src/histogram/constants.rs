//! Pixel geometry of the packet histogram
//!
//! The chart occupies the whole 128x64 display: a y-axis on the left, the
//! time axis along the bottom, and the bar area between them.

/// X position of the vertical (count) axis
pub const AXIS_X: i32 = 3;

/// Y position of the time axis; bars stand on this row
pub const BASELINE_Y: i32 = 60;

/// Right end of the time axis
pub const X_AXIS_END: i32 = 127;

/// Length of each arrow-head stroke
pub const ARROW_PX: i32 = 3;

/// Rows of the count-axis tick marks
pub const TICK_ROWS: [i32; 4] = [48, 36, 24, 12];

/// Length of a tick mark to the right of the axis
pub const TICK_PX: i32 = 2;

/// Top-left corner of the `t` label next to the time-axis arrow
pub const TIME_LABEL_POS: (i32, i32) = (121, 45);

/// Top-left corner of the `SIZE:.. MAX:..` caption
pub const CAPTION_POS: (i32, i32) = (10, 0);

/// X position of the first bar
pub const BARS_START_X: i32 = 8;

/// Horizontal room for bars
pub const AVAILABLE_WIDTH_PX: u32 = 108;

/// Height of a bar for the busiest bucket
pub const AVAILABLE_HEIGHT_PX: u32 = 48;

/// Capacity of the caption string: `SIZE:` and ` MAX:` plus the widest
/// `u32` (10 digits) and `u64` (20 digits)
pub const MAX_CAPTION_LENGTH: usize = 5 + 10 + 5 + 20;

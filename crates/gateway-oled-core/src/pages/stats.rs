//! System statistics page.

use std::time::Duration;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::pages::constants::UNAVAILABLE;
use crate::providers::SystemStats;
use crate::ui::{ROW_HEIGHT_PX, TextLine, draw_row, draw_title_bar, fit_line};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
const SECS_PER_WEEK: u64 = 7 * SECS_PER_DAY;

/// Compact uptime such as `2 weeks 3 days 5m`, split like `uptime -p`. Zero
/// components are omitted; less than a minute reads `0m`.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let weeks = secs / SECS_PER_WEEK;
    let days = (secs % SECS_PER_WEEK) / SECS_PER_DAY;
    let hours = (secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;

    let mut parts = Vec::with_capacity(4);
    match weeks {
        0 => {}
        1 => parts.push("1 week".to_string()),
        n => parts.push(format!("{n} weeks")),
    }
    match days {
        0 => {}
        1 => parts.push("1 day".to_string()),
        n => parts.push(format!("{n} days")),
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || parts.is_empty() {
        parts.push(format!("{minutes}m"));
    }
    parts.join(" ")
}

/// The four body rows.
pub fn stats_rows(stats: &SystemStats) -> [TextLine; 4] {
    let free = (100.0 - stats.memory_percent).clamp(0.0, 100.0);
    [
        fit_line(&format!("CPU: {:.1}%", stats.cpu_percent)),
        fit_line(&format!("Free memory: {free:.1}%")),
        fit_line(&format!(
            "Temperature: {}",
            stats.temperature.as_deref().unwrap_or(UNAVAILABLE)
        )),
        fit_line(&format!("Uptime: {}", format_uptime(stats.uptime))),
    ]
}

/// Draw the page. Always displayable.
pub fn draw<D>(display: &mut D, stats: &SystemStats) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut y = draw_title_bar(display, "STATS")?;
    for row in stats_rows(stats) {
        draw_row(display, 0, y, &row)?;
        y += ROW_HEIGHT_PX as i32;
    }
    Ok(true)
}

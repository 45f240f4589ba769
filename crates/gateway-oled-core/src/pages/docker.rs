//! Container status page.
//!
//! Each row is a left-aligned lowercase name column and a right-aligned
//! uppercase status column. When more services exist than rows, the last row
//! summarises the rest.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::pages::constants::{
    MAX_SERVICE_ROWS, SERVICE_NAME_COLUMNS, SERVICE_ROWS_WITH_SUMMARY, SERVICE_STATUS_COLUMNS,
};
use crate::providers::Service;
use crate::ui::{ROW_HEIGHT_PX, TextLine, draw_row, draw_title_bar, fit_line};

/// Status word shown on the display; `Exited` reads as `DOWN`.
fn display_status(status: &str) -> String {
    if status.eq_ignore_ascii_case("exited") {
        "DOWN".into()
    } else {
        status.to_uppercase()
    }
}

/// Format one service row, e.g. `udp-packet-forwar  UP`.
pub fn format_service(service: &Service) -> TextLine {
    fit_line(&format!(
        "{:<name_w$.name_w$}{:>status_w$.status_w$}",
        service.name.to_lowercase(),
        display_status(&service.status),
        name_w = SERVICE_NAME_COLUMNS,
        status_w = SERVICE_STATUS_COLUMNS,
    ))
}

/// Rows to display, including the `... and N more` summary when needed.
pub fn service_rows(services: &[Service]) -> Vec<TextLine> {
    if services.len() <= MAX_SERVICE_ROWS {
        return services.iter().map(format_service).collect();
    }

    let mut rows: Vec<TextLine> = services[..SERVICE_ROWS_WITH_SUMMARY]
        .iter()
        .map(format_service)
        .collect();
    rows.push(fit_line(&format!(
        "... and {} more",
        services.len() - SERVICE_ROWS_WITH_SUMMARY
    )));
    rows
}

/// Draw the page. Not displayable when there are no services.
pub fn draw<D>(display: &mut D, services: &[Service]) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if services.is_empty() {
        return Ok(false);
    }

    let mut y = draw_title_bar(display, "DOCKER")?;
    for row in service_rows(services) {
        draw_row(display, 0, y, &row)?;
        y += ROW_HEIGHT_PX as i32;
    }
    Ok(true)
}

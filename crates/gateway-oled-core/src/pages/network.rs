//! Network page: one `name: address` row per visible IPv4 interface.

use std::collections::BTreeSet;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::pages::constants::IFACE_NAME_COLUMNS;
use crate::providers::{InterfaceAddress, NetworkSnapshot};
use crate::ui::{ROW_HEIGHT_PX, TextLine, draw_row, draw_title_bar, fit_line};

/// Interface name prefixes worth showing (ethernet, wifi, cellular, bridges, bonds).
pub const LISTED_PREFIXES: [&str; 8] = ["bond", "e", "w", "r", "br", "lt", "umts", "lan"];

/// Whether an interface belongs on the page.
///
/// Loopback and virtual interfaces are filtered by prefix. Bridges the
/// container engine created are hidden even though they match `br`.
pub fn is_listed(name: &str, container_bridges: &BTreeSet<String>) -> bool {
    LISTED_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
        && !container_bridges.contains(name)
}

/// Format one row, cutting the interface name for column alignment.
pub fn format_interface(iface: &InterfaceAddress) -> TextLine {
    let name: String = iface.name.chars().take(IFACE_NAME_COLUMNS).collect();
    fit_line(&format!("{}: {}", name, iface.address))
}

/// Rows to display, in enumeration order.
pub fn visible_rows(snapshot: &NetworkSnapshot) -> Vec<TextLine> {
    snapshot
        .interfaces
        .iter()
        .filter(|iface| is_listed(&iface.name, &snapshot.container_bridges))
        .map(format_interface)
        .collect()
}

/// Draw the page. Always displayable; an empty or failed snapshot leaves the
/// body blank under the title.
pub fn draw<D>(display: &mut D, snapshot: Option<&NetworkSnapshot>) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut y = draw_title_bar(display, "NETWORK")?;

    if let Some(snapshot) = snapshot {
        for row in visible_rows(snapshot) {
            draw_row(display, 0, y, &row)?;
            y += ROW_HEIGHT_PX as i32;
        }
    }

    Ok(true)
}

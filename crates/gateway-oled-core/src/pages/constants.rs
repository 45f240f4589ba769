//! Shared layout constants for pages
//!
//! List pages use one inverted title row followed by up to five body rows of
//! the 6x10 font.

/// Width of the lit frame around the splash screen
pub const SPLASH_BORDER_PX: u32 = 5;

/// Splash title sits this far above the vertical center
pub const SPLASH_TITLE_OFFSET_PX: i32 = 20;

/// Splash version line sits this far below the vertical center
pub const SPLASH_VERSION_OFFSET_PX: i32 = 5;

/// Interface names are cut to this many characters for column alignment
pub const IFACE_NAME_COLUMNS: usize = 6;

/// Width of the service name column on the Docker page
pub const SERVICE_NAME_COLUMNS: usize = 17;

/// Width of the right-aligned status column on the Docker page
pub const SERVICE_STATUS_COLUMNS: usize = 4;

/// Up to this many services are listed without a summary row
pub const MAX_SERVICE_ROWS: usize = 5;

/// Services listed when a `... and N more` row is needed
pub const SERVICE_ROWS_WITH_SUMMARY: usize = 4;

/// Placeholder for readings that are not available
pub const UNAVAILABLE: &str = "N/A";

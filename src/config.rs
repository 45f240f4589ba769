//! Fixed settings of the gateway display
//!
//! The daemon has no configuration file and no flags. Page-level settings
//! (splash title, bucket count) live in [`gateway_oled_core::PageConfig`].

use std::time::Duration;

/// Time between rotation ticks
pub const INTERVAL: Duration = Duration::from_secs(5);

/// I2C bus the panel is wired to
pub const I2C_BUS: &str = "/dev/i2c-1";

/// 7-bit I2C address of the SSD1306
pub const I2C_ADDRESS: u8 = 0x3C;

/// File holding `VERSION_ID` for the splash page
pub const OS_RELEASE: &str = "/etc/os-release";

/// Packet metrics endpoint of the local forwarder
pub const METRICS_URL: &str = "http://127.0.0.1:8888/api/metrics";

/// Upper bound on one metrics request, connect included
pub const METRICS_TIMEOUT: Duration = Duration::from_millis(1500);

//! gateway-oled daemon
//!
//! Drives an SSD1306 OLED on a LoRaWAN gateway: the page rotation from
//! `gateway-oled-core`, fed by host providers (network interfaces, system
//! stats, container list, packet metrics) and committed over Linux I2C.

pub mod config;
pub mod display;
pub mod display_manager;
pub mod error;
pub mod providers;

pub use display::OledDisplay;
pub use display_manager::DisplayManager;
pub use error::Error;

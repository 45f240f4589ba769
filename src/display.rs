//! SSD1306 OLED on a Linux I2C bus

use std::path::Path;

use display_interface::DisplayError;
use gateway_oled_core::{DisplaySink, FrameBuffer};
use linux_embedded_hal::I2cdev;
use log::{debug, info};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::error::Error;

type Driver = Ssd1306<
    I2CInterface<I2cdev>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// The panel, owned by the display manager for the life of the process.
pub struct OledDisplay {
    driver: Driver,
}

impl OledDisplay {
    /// Open the bus, initialise the controller and blank the panel.
    ///
    /// Fails when the bus is missing or nothing acknowledges at the address.
    pub fn open(bus: &Path, address: u8) -> Result<Self, Error> {
        let i2c = I2cdev::new(bus).map_err(|e| Error::I2c {
            path: bus.to_path_buf(),
            reason: e.to_string(),
        })?;
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);

        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        driver.init().map_err(Error::DisplayInit)?;
        driver.clear_buffer();
        driver.flush().map_err(Error::DisplayInit)?;

        info!("OLED ready on {} at {:#04x}", bus.display(), address);
        Ok(Self { driver })
    }
}

impl DisplaySink for OledDisplay {
    type Error = DisplayError;

    fn commit(&mut self, frame: &mut FrameBuffer) -> Result<(), Self::Error> {
        frame.flush(&mut self.driver)?;
        self.driver.flush()
    }

    fn power_off(&mut self) -> Result<(), Self::Error> {
        debug!("Powering off OLED");
        self.driver.clear_buffer();
        self.driver.flush()?;
        self.driver.set_display_on(false)
    }
}

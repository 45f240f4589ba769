//! The physical (or simulated) screen a finished frame is committed to.

use crate::framebuffer::FrameBuffer;

/// A monochrome display that receives one committed frame per tick.
pub trait DisplaySink {
    type Error: core::fmt::Debug;

    /// Push the frame's changed pixels to the device and show them.
    fn commit(&mut self, frame: &mut FrameBuffer) -> Result<(), Self::Error>;

    /// Blank the panel before the process exits.
    fn power_off(&mut self) -> Result<(), Self::Error>;
}

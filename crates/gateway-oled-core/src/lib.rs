//! Hardware-independent core library for gateway-oled
//!
//! This crate contains all platform-agnostic logic of the gateway status
//! display: the 1-bit framebuffer, the display sink abstraction, provider
//! traits and their snapshot types, the page renderers, the packet histogram
//! and the page rotation scheduler.
//!
//! It has no knowledge of I2C, SDL or the operating system, so it compiles and
//! tests on any host. The daemon (root crate) and the simulator plug concrete
//! providers and sinks into it.

pub mod config;
pub mod framebuffer;
pub mod histogram;
pub mod metrics;
pub mod pages;
pub mod providers;
pub mod sink;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use config::PageConfig;
pub use framebuffer::FrameBuffer;
pub use metrics::{Bucket, MetricsSnapshot, Totals};
pub use pages::{PageKind, PageManager, RotationError, TickOutcome};
pub use providers::{ProviderError, Providers};
pub use sink::DisplaySink;

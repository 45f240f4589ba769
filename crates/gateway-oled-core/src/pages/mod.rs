pub mod constants;
pub mod docker;
pub mod intro;
pub mod lorawan;
pub mod network;
pub mod page;
pub mod page_manager;
pub mod stats;

pub use page::PageKind;
pub use page_manager::{DEFAULT_ROTATION, PageManager, RotationError, TickOutcome};

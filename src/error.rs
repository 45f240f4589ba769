use std::path::PathBuf;

use display_interface::DisplayError;
use thiserror::Error;

/// Fatal daemon errors. Provider failures never end up here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open I2C bus {path}: {reason}")]
    I2c { path: PathBuf, reason: String },

    #[error("display did not respond to initialisation: {0:?}")]
    DisplayInit(DisplayError),

    #[error("cannot build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("async runtime: {0}")]
    Runtime(std::io::Error),

    #[error("rotation tick panicked: {0}")]
    TickPanicked(String),
}

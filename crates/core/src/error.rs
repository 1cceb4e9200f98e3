//! Error taxonomy for construction and sprite I/O.
//!
//! Drawing never fails; only construction-time validation and file access do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A buffer or sprite was requested with a non-positive size.
    #[error("invalid dimension {width}x{height}: width and height must be positive")]
    InvalidDimension { width: i32, height: i32 },

    /// Engine construction parameters were rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Sprite file open, read or write failure (including malformed contents).
    #[error("sprite I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

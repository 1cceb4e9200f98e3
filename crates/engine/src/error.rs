//! Engine error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Construction or sprite failure from the drawing core.
    #[error(transparent)]
    Core(#[from] cge_core::Error),

    /// The platform failed to present, sample input or set up its surface.
    #[error(transparent)]
    Platform(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

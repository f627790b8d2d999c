//! Error types
//!
//! The simulation never fails; errors only come from the backend and from
//! reading or writing snapshots and settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Window/input/audio/draw backend failure. Fatal for the loop.
    #[error("backend failure: {0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedSnapshot { found: u32, expected: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

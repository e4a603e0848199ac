use std::io;

use thiserror::Error;

/// Failures surfaced to the host.
///
/// Collisions are not errors; they move the game into `Phase::GameOver`.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("grid extent {extent} is below the minimum of {min}")]
    GridTooSmall { extent: u16, min: u16 },

    #[error("grid extent {extent} exceeds the maximum of {max}")]
    GridTooLarge { extent: u16, max: u16 },

    #[error(
        "initial tick interval {initial_ms}ms must be at least the non-zero floor of {min_ms}ms"
    )]
    InvalidTickInterval { initial_ms: u64, min_ms: u64 },
}

pub type Result<T> = std::result::Result<T, GameError>;

//! Crate-wide error and result types.

use derive_more::{Display, Error};

/// Errors from device setup.
///
/// The control loop itself has no failure states: out-of-range coordinates go
/// to the sink pixel, button glitches are absorbed by debounce, and pattern
/// index arithmetic wraps. Only hardware bring-up can fail.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum Error {
    /// A background task could not be spawned on the executor.
    #[display("task spawn failed")]
    TaskSpawn,
}

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

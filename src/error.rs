//! Errors returned by tree lookups and removals.

use thiserror::Error;

/// The ways a tree operation can fail.
///
/// Absence of a key is an ordinary outcome, so it is reported through a
/// `Result` and left to the caller to decide whether it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No node reachable by the descent rule holds the requested key.
    #[error("key not found")]
    KeyNotFound,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

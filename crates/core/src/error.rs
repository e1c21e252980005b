//! Error types for treedump.
//!
//! The core owns exactly one failure domain: I/O against the input byte
//! stream (and, symmetrically, the output sink the dump is written to).
//! Tree construction has no error conditions: every well-formed frequency
//! table, including the all-zero one, has a defined non-failing result.

use thiserror::Error;

/// Top-level error type for all core operations.
///
/// A read failure is fatal to the whole run: the frequency counter never
/// surfaces a partially filled table as if it were complete.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input stream or writing the dump failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

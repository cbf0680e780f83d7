//! Error types.

/// The error type for fallible algebra helpers.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A positional numeral system needs a radix of at least 2.
    #[error("invalid radix {0}: radix must be at least 2")]
    InvalidRadix(u32),
}

/// A result type returning algebra errors.
pub type Result<T, E = Error> = std::result::Result<T, E>;

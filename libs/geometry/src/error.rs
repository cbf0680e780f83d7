//! Error types.

/// The error type for shape construction.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A circle radius must be finite and strictly positive.
    #[error("invalid circle radius {0}: radius must be finite and positive")]
    InvalidRadius(f32),
}

/// A result type returning geometry errors.
pub type Result<T, E = Error> = std::result::Result<T, E>;

use thiserror::Error;

/// Errors that can occur when extracting a value from an [`AnyValue`](crate::AnyValue)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AnyError {
    /// The requested type does not exactly match the type of the held value
    #[error("bad any cast: expected `{expected}`, found `{found}`")]
    BadCast {
        /// Name of the type the caller asked for
        expected: &'static str,
        /// Name of the type actually held
        found: &'static str,
    },
    /// Attempted to access the value of an empty container
    #[error("bad any cast: expected `{expected}`, container is empty")]
    Empty {
        /// Name of the type the caller asked for
        expected: &'static str,
    },
}

/// A specialized `Result` type for `AnyValue` operations.
pub type Result<T> = std::result::Result<T, AnyError>;

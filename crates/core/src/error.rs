//! Error types for core primitives.

/// Errors produced when constructing core primitives from raw bytes or text.
///
/// None of these are reachable from the classification or permission paths,
/// which reject malformed input with plain `false`/`None` results; they
/// surface only from explicit constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input has the wrong length or shape for the requested type.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// The input is not a well-formed compressed public key.
    #[error("invalid public key: {0}")]
    InvalidKey(String),
}

/// Result alias for core primitive constructors.
pub type Result<T> = std::result::Result<T, Error>;

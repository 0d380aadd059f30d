//! Error types for manifest decoding and validation.

/// Errors raised while decoding or structurally validating a manifest.
///
/// Permission evaluation itself never produces these; by the time a manifest
/// reaches the engine it is a well-typed in-memory value and every engine
/// answer is a boolean.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The manifest violates a structural invariant.
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),
}

/// Result alias for manifest decoding and validation.
pub type Result<T> = std::result::Result<T, Error>;

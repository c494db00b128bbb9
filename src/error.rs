//! Error types for building and consuming create parameters.
//!
//! The builder itself only raises the first three variants. `MissingField`
//! and `InvalidConfig` come from resolving a finished descriptor into an
//! [`InitialConfig`](crate::config::InitialConfig).

use std::convert::Infallible;

use thiserror::Error;

use crate::attrs::AttrKey;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling or resolving create parameters.
#[derive(Debug, Error)]
pub enum Error {
    /// A player index outside `{0, 1}` was supplied.
    #[error("invalid player index {0}: expected 0 or 1")]
    InvalidArgument(i64),

    /// The raw attribute code is not part of the recognized key space.
    #[error("unrecognized attribute key {0}")]
    UnrecognizedKey(u32),

    /// The value does not have the type the key expects.
    #[error("type mismatch for {key}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The key being written.
        key: AttrKey,
        /// What the key accepts.
        expected: &'static str,
        /// What was supplied.
        found: String,
    },

    /// The handle was already released or never allocated by this store.
    #[error("stale create-param handle {0}")]
    StaleHandle(u64),

    /// A field the engine requires to start a match is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but its value cannot seed a match.
    #[error("invalid value for {field}: {reason}")]
    InvalidConfig {
        /// The offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Descriptor (de)serialization failed.
    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

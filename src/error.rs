//! Error types for unimark operations.

use thiserror::Error;

/// Errors that can occur when resolving caller-supplied names.
///
/// Malformed Markdown never errors; the renderer degrades to literal
/// passthrough. The only failure modes are unrecognized style tags and
/// preset names, which indicate a caller bug rather than bad user data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown font style: {0}")]
    UnknownStyle(String),

    #[error("unknown style preset: {0}")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, Error>;

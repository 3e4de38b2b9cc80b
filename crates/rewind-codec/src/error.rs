//! Error types for container encode/decode.

use std::fmt;

/// Errors from serializing, compressing, or reconstructing a recording.
#[derive(Debug)]
pub enum CodecError {
    /// A single entry or client failed structural or range validation.
    ///
    /// Fails the entire containing decode; no partial store is ever
    /// returned.
    Malformed {
        /// Human-readable description of what was wrong.
        detail: String,
    },
    /// The artifact could not be decompressed, or the decompressed
    /// document lacks the required top-level structure.
    Corrupt {
        /// Human-readable description of what was wrong.
        detail: String,
    },
    /// The artifact was written by a newer format than this build
    /// understands.
    UnsupportedVersion {
        /// The version found in the artifact.
        found: u32,
    },
    /// The in-memory store could not be serialized (e.g. a non-finite
    /// float has no JSON representation).
    Serialize {
        /// Human-readable description of what was wrong.
        detail: String,
    },
    /// Compression of the serialized document failed.
    Compression {
        /// Human-readable description of what was wrong.
        detail: String,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { detail } => write!(f, "malformed record: {detail}"),
            Self::Corrupt { detail } => write!(f, "corrupt artifact: {detail}"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported container version {found}")
            }
            Self::Serialize { detail } => write!(f, "serialization failed: {detail}"),
            Self::Compression { detail } => write!(f, "compression failed: {detail}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl CodecError {
    /// Shorthand for a [`CodecError::Malformed`] with formatted detail.
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }

    /// Shorthand for a [`CodecError::Corrupt`] with formatted detail.
    pub(crate) fn corrupt(detail: impl Into<String>) -> Self {
        Self::Corrupt {
            detail: detail.into(),
        }
    }
}

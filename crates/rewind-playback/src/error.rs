//! Errors raised by the playback path.

use std::error::Error;
use std::fmt;

/// Failure constructing a playback viewer.
#[derive(Debug)]
pub enum PlaybackError {
    /// The recording holds no client snapshots; there is nothing to
    /// re-enact.
    NoClients,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoClients => write!(f, "recording has no clients to play back"),
        }
    }
}

impl Error for PlaybackError {}

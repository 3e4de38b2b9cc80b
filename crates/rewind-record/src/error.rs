//! Errors raised by the record path.

use std::error::Error;
use std::fmt;

use rewind_codec::CodecError;

/// Failure inside the persist pipeline or its worker.
#[derive(Debug)]
pub enum PipelineError {
    /// The pipeline was already finalized; no further input is accepted.
    AlreadyFinalized,
    /// The worker failed to serialize or compress the recording.
    Compose(CodecError),
    /// The worker thread died before delivering a result.
    WorkerLost,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFinalized => write!(f, "persist pipeline already finalized"),
            Self::Compose(e) => write!(f, "failed to compose recording artifact: {e}"),
            Self::WorkerLost => write!(f, "persist worker terminated without a result"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compose(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for PipelineError {
    fn from(e: CodecError) -> Self {
        Self::Compose(e)
    }
}

/// Failure in recording-session lifecycle handling.
#[derive(Debug)]
pub enum SessionError {
    /// A session needs at least one client to record.
    NoClients,
    /// The operation requires an actively recording session.
    NotRecording,
    /// The session is already recording.
    AlreadyRecording,
    /// The underlying persist pipeline failed.
    Pipeline(PipelineError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoClients => write!(f, "session has no clients to record"),
            Self::NotRecording => write!(f, "session is not recording"),
            Self::AlreadyRecording => write!(f, "session is already recording"),
            Self::Pipeline(e) => write!(f, "persist pipeline error: {e}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pipeline(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PipelineError> for SessionError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

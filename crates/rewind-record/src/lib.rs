//! Recording sessions and asynchronous persistence for Rewind.
//!
//! The record path runs on the host's simulation thread: a
//! [`RecordSession`] buffers the entries reported during each tick and
//! flushes them, tick by tick, into a [`PersistPipeline`]. Stopping the
//! session seals the recording and moves serialization plus compression
//! onto a worker thread; the host polls the returned [`PersistHandle`]
//! for the finished artifact. A [`SessionRegistry`] tracks the live
//! sessions so host events can be routed to the recordings that want
//! them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod session;

pub use buffer::CaptureBuffer;
pub use error::{PipelineError, SessionError};
pub use pipeline::{Composed, PersistHandle, PersistPipeline};
pub use registry::SessionRegistry;
pub use session::RecordSession;

//! Replay engine for Rewind recordings.
//!
//! A decoded [`RecordingStore`](rewind_core::RecordingStore) is split
//! into one [`PlaybackScript`] per recorded client, and a
//! [`PlaybackViewer`] drives them all in lockstep against host-provided
//! [`ActorSink`]s — one puppet per client. The viewer is host-clocked:
//! the host calls [`PlaybackViewer::tick`] once per simulation tick and
//! the viewer advances each live actor by the configured number of
//! steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod actor;
pub mod error;
pub mod script;
pub mod sink;
pub mod viewer;

pub use actor::PlaybackActor;
pub use error::PlaybackError;
pub use script::{partition, PlaybackScript};
pub use sink::ActorSink;
pub use viewer::PlaybackViewer;

//! Container serialization and compressed artifacts for Rewind recordings.
//!
//! A recording is persisted as a self-describing JSON document keyed by
//! integer-string tags (compactness over readability), then compressed
//! with zlib. [`Artifact`] wraps the compressed bytes plus a format
//! version; [`Artifact::decode`] reverses the whole pipeline,
//! reconstructing a [`RecordingStore`](rewind_core::RecordingStore) or
//! failing closed on the first structural problem.
//!
//! # Container layout
//!
//! ```text
//! { "0": { "<tick>": [entry, ...], ... },   // tick-indexed entry lists
//!   "1": [client, ...] }                    // client snapshots
//! ```
//!
//! Entries and clients are tag-keyed objects (see [`tags`]); binary skin
//! payloads are embedded base64-encoded so they survive the text
//! container without loss.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod artifact;
pub mod client;
pub mod container;
pub mod entry;
pub mod error;
pub mod tags;
mod value;

pub use artifact::{compose, Artifact};
pub use client::{decode_client, encode_client};
pub use container::{decode_store, encode_store};
pub use entry::{decode_entry, encode_entry};
pub use error::CodecError;

/// Current container format version.
///
/// History:
/// - v1: initial format (zlib-compressed JSON, two top-level sections).
pub const FORMAT_VERSION: u32 = 1;

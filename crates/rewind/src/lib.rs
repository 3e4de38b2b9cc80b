//! Rewind: game-session recording and replay.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Rewind sub-crates. For most users, adding `rewind` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rewind::prelude::*;
//!
//! // Describe who is being recorded.
//! let steve = ActorId::from("steve");
//! let client = ClientSnapshot::new(
//!     steve.clone(),
//!     Skin {
//!         id: "skin-steve".into(),
//!         data: vec![0u8; 8],
//!         cape: Vec::new(),
//!         geometry_name: "geometry.humanoid".into(),
//!         geometry_data: Vec::new(),
//!     },
//!     Vec3::zero(),
//!     Rotation::zero(),
//!     "Steve".into(),
//! );
//!
//! // Record two ticks of activity.
//! let mut session = RecordSession::new(WorldId::from("overworld"), vec![client]).unwrap();
//! session.start().unwrap();
//! session
//!     .add_entry(DataEntry::block_break(steve.clone(), Vec3::new(1.0, 64.0, 0.0)))
//!     .unwrap();
//! session.capture_tick().unwrap();
//! session.capture_tick().unwrap();
//!
//! // Compression happens on a worker thread; wait for the artifact.
//! let composed = session.stop_and_save(()).unwrap().wait().unwrap();
//! let store = composed.artifact.decode().unwrap();
//! assert_eq!(store.ticks().len(), 2);
//! assert_eq!(store.entry_count(), 1);
//! ```
//!
//! Playback takes a decoded store plus one [`ActorSink`](playback::ActorSink)
//! implementation per recorded client; see the `rewind-playback` docs.
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rewind-core` | Entry model, IDs, snapshots, the store |
//! | [`codec`] | `rewind-codec` | Container encode/decode, compressed artifacts |
//! | [`record`] | `rewind-record` | Sessions, registry, async persist pipeline |
//! | [`playback`] | `rewind-playback` | Scripts, actor sinks, the viewer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Entry model, identifiers, and the in-memory store (`rewind-core`).
///
/// The [`types::DataEntry`] tagged union is the unit of recording; a
/// [`types::RecordingStore`] holds a whole session's worth of them.
pub use rewind_core as types;

/// Container serialization and compressed artifacts (`rewind-codec`).
///
/// [`codec::compose`] turns a store into a zlib-compressed
/// [`codec::Artifact`]; [`codec::Artifact::decode`] reverses it,
/// failing closed on any structural problem.
pub use rewind_codec as codec;

/// Recording sessions and asynchronous persistence (`rewind-record`).
///
/// Drive a [`record::RecordSession`] from the host tick loop; track
/// live sessions in a [`record::SessionRegistry`].
pub use rewind_record as record;

/// Replay engine (`rewind-playback`).
///
/// Implement [`playback::ActorSink`] over a host puppet and hand a
/// decoded store to [`playback::PlaybackViewer`].
pub use rewind_playback as playback;

/// Common imports for typical Rewind usage.
///
/// ```rust
/// use rewind::prelude::*;
/// ```
pub mod prelude {
    // Entry model and identifiers
    pub use rewind_core::{
        ActorId, AnimationKind, ChestAction, ClientSnapshot, DamageCause, DataEntry,
        InventoryKind, ItemPayload, MovementState, RecordingStore, RegainReason, Rotation,
        SessionId, Skin, TickId, Vec3, WorldId,
    };

    // Errors
    pub use rewind_codec::CodecError;
    pub use rewind_core::EntryError;
    pub use rewind_playback::PlaybackError;
    pub use rewind_record::{PipelineError, SessionError};

    // Persistence
    pub use rewind_codec::{compose, Artifact};

    // Recording
    pub use rewind_record::{PersistHandle, RecordSession, SessionRegistry};

    // Playback
    pub use rewind_playback::{ActorSink, PlaybackViewer};
}

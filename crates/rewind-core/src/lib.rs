//! Core types for the Rewind session recorder.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the recorded-event data model: strongly-typed identifiers, geometry
//! primitives, the [`DataEntry`] tagged union with its range-validated
//! payload enums, the [`ClientSnapshot`] identity record, and the
//! in-memory [`RecordingStore`].
//!
//! Everything here is data-only. Serialization lives in `rewind-codec`,
//! capture in `rewind-record`, and replay behavior in `rewind-playback`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod client;
pub mod entry;
pub mod error;
pub mod geom;
pub mod id;
pub mod store;

pub use client::{ClientSnapshot, Skin};
pub use entry::{
    AnimationKind, ChestAction, DamageCause, DataEntry, EntryKind, EntryPayload, InventoryKind,
    ItemPayload, MovementState, RegainReason, DEFAULT_SPEED, MAX_ARMOR_SLOT,
};
pub use error::EntryError;
pub use geom::{Rotation, Vec3};
pub use id::{ActorId, SessionId, TickId, WorldId};
pub use store::RecordingStore;

//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies the actor a recorded event belongs to.
///
/// In the host this is the player/entity name; the core treats it as an
/// opaque string key. Every [`DataEntry`](crate::DataEntry) carries the
/// `ActorId` of its owner, and playback partitions entries by it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub String);

impl ActorId {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ActorId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<&str> for ActorId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

/// Monotonically increasing tick counter.
///
/// One tick is one unit of host simulation time during recording. The
/// same index doubles as the playback step for the derived scripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The immediately following tick.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies the host world a session is bound to.
///
/// Opaque to the core; used only to answer "which sessions are recording
/// in this world" registry queries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldId(pub String);

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WorldId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<&str> for WorldId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

/// Counter for unique [`SessionId`] allocation.
static SESSION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-process identifier for a recording session.
///
/// Allocated from a monotonic atomic counter via [`SessionId::next`].
/// Two distinct sessions always have different IDs, so a registry key
/// is never reused within a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Allocate a fresh, unique session ID. Thread-safe.
    pub fn next() -> Self {
        Self(SESSION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

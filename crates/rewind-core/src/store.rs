//! The in-memory form of a full recording.

use indexmap::IndexMap;

use crate::client::ClientSnapshot;
use crate::entry::DataEntry;
use crate::id::TickId;

/// A full recording: tick-indexed entry lists plus the client
/// snapshots active in the session.
///
/// Owned by exactly one component at a time — the persist pipeline
/// while recording, the decoder's caller afterwards. Ticks keep their
/// insertion order, which the capture path guarantees is ascending;
/// the decoder re-sorts numerically to restore that invariant.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingStore {
    ticks: IndexMap<TickId, Vec<DataEntry>>,
    clients: Vec<ClientSnapshot>,
    version: u32,
}

impl RecordingStore {
    /// An empty store stamped with a format version.
    pub fn new(version: u32) -> Self {
        Self {
            ticks: IndexMap::new(),
            clients: Vec::new(),
            version,
        }
    }

    /// Assemble a store from already-collected parts.
    pub fn from_parts(
        ticks: IndexMap<TickId, Vec<DataEntry>>,
        clients: Vec<ClientSnapshot>,
        version: u32,
    ) -> Self {
        Self {
            ticks,
            clients,
            version,
        }
    }

    /// Record one tick's entries. An existing list for the same tick
    /// is replaced; the capture path flushes each tick exactly once.
    pub fn insert_tick(&mut self, tick: TickId, entries: Vec<DataEntry>) {
        self.ticks.insert(tick, entries);
    }

    /// Add a client snapshot.
    pub fn push_client(&mut self, client: ClientSnapshot) {
        self.clients.push(client);
    }

    /// The tick-indexed entry lists.
    pub fn ticks(&self) -> &IndexMap<TickId, Vec<DataEntry>> {
        &self.ticks
    }

    /// Entries recorded at one tick, if any.
    pub fn entries_at(&self, tick: TickId) -> Option<&[DataEntry]> {
        self.ticks.get(&tick).map(Vec::as_slice)
    }

    /// The recorded client snapshots.
    pub fn clients(&self) -> &[ClientSnapshot] {
        &self.clients
    }

    /// Format version this recording was made with.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Total number of entries across all ticks.
    pub fn entry_count(&self) -> usize {
        self.ticks.values().map(Vec::len).sum()
    }

    /// Whether the store holds neither ticks nor clients.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty() && self.clients.is_empty()
    }

    /// Break the store apart for consumption by playback setup.
    pub fn into_parts(self) -> (IndexMap<TickId, Vec<DataEntry>>, Vec<ClientSnapshot>, u32) {
        (self.ticks, self.clients, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{DamageCause, DataEntry};
    use crate::id::ActorId;

    #[test]
    fn insert_and_count() {
        let mut store = RecordingStore::new(1);
        assert!(store.is_empty());
        let a = ActorId::from("a");
        store.insert_tick(
            TickId(0),
            vec![DataEntry::take_damage(a.clone(), 1.0, DamageCause::Fall)],
        );
        store.insert_tick(TickId(1), Vec::new());
        assert_eq!(store.entry_count(), 1);
        assert_eq!(store.entries_at(TickId(1)), Some(&[] as &[DataEntry]));
        assert_eq!(store.entries_at(TickId(2)), None);
    }
}

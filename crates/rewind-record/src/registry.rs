//! Tracking of live recording sessions.

use indexmap::IndexMap;

use rewind_core::{SessionId, WorldId};

use crate::session::RecordSession;

/// Holds every live [`RecordSession`], keyed by session id.
///
/// The host keeps one registry and routes tick callbacks and events to
/// the sessions interested in them.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: IndexMap<SessionId, RecordSession>,
}

impl SessionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a session, returning its id.
    pub fn register(&mut self, session: RecordSession) -> SessionId {
        let id = session.id();
        self.sessions.insert(id, session);
        id
    }

    /// Look up a session by id.
    pub fn get(&self, id: SessionId) -> Option<&RecordSession> {
        self.sessions.get(&id)
    }

    /// Look up a session by id, mutably.
    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut RecordSession> {
        self.sessions.get_mut(&id)
    }

    /// Stop tracking a session, handing it back for stop/save/discard.
    pub fn remove(&mut self, id: SessionId) -> Option<RecordSession> {
        self.sessions.shift_remove(&id)
    }

    /// Sessions currently capturing.
    pub fn recording(&self) -> impl Iterator<Item = &RecordSession> {
        self.sessions.values().filter(|s| s.is_recording())
    }

    /// Sessions currently capturing in one world, mutably.
    ///
    /// The per-world filter is what event routing uses: a block broken
    /// in the nether must not land in an overworld recording.
    pub fn recording_in_mut(
        &mut self,
        world: &WorldId,
    ) -> impl Iterator<Item = &mut RecordSession> + '_ {
        let world = world.clone();
        self.sessions
            .values_mut()
            .filter(move |s| s.is_recording() && *s.world() == world)
    }

    /// Number of tracked sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are tracked.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_core::{ActorId, ClientSnapshot, Rotation, Skin, Vec3};

    fn session(world: &str, name: &str) -> RecordSession {
        let snap = ClientSnapshot::new(
            ActorId::from(name),
            Skin {
                id: format!("skin-{name}"),
                data: Vec::new(),
                cape: Vec::new(),
                geometry_name: String::new(),
                geometry_data: Vec::new(),
            },
            Vec3::zero(),
            Rotation::zero(),
            name.to_string(),
        );
        RecordSession::new(WorldId::from(world), vec![snap]).unwrap()
    }

    #[test]
    fn register_remove_round_trip() {
        let mut registry = SessionRegistry::new();
        let id = registry.register(session("overworld", "steve"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get(id).is_some());
        assert!(registry.remove(id).is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn recording_filters_by_state_and_world() {
        let mut registry = SessionRegistry::new();
        let overworld = registry.register(session("overworld", "steve"));
        let nether = registry.register(session("nether", "alex"));
        registry.register(session("overworld", "idle"));

        registry.get_mut(overworld).unwrap().start().unwrap();
        registry.get_mut(nether).unwrap().start().unwrap();

        assert_eq!(registry.recording().count(), 2);
        let in_overworld: Vec<SessionId> = registry
            .recording_in_mut(&WorldId::from("overworld"))
            .map(|s| s.id())
            .collect();
        assert_eq!(in_overworld, vec![overworld]);
    }
}

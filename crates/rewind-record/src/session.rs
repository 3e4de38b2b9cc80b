//! One recording session: a world, its clients, and the capture loop.

use indexmap::IndexMap;

use rewind_core::{ActorId, ClientSnapshot, DataEntry, SessionId, TickId, WorldId};

use crate::buffer::CaptureBuffer;
use crate::error::SessionError;
use crate::pipeline::{PersistHandle, PersistPipeline};

/// Records the activity of a set of clients in one world.
///
/// Lifecycle: construct with the clients to record, [`start`](Self::start),
/// then per host tick push entries via [`add_entry`](Self::add_entry) and
/// close the tick with [`capture_tick`](Self::capture_tick). Finish with
/// [`stop_and_save`](Self::stop_and_save) or [`discard`](Self::discard);
/// both consume the session.
#[derive(Debug)]
pub struct RecordSession {
    id: SessionId,
    world: WorldId,
    clients: IndexMap<ActorId, ClientSnapshot>,
    buffer: CaptureBuffer,
    pipeline: PersistPipeline,
    current_tick: TickId,
    recording: bool,
}

impl RecordSession {
    /// Create a session over the given clients.
    ///
    /// Fails with [`SessionError::NoClients`] when the list is empty; a
    /// recording with nobody in it can never be played back.
    pub fn new(world: WorldId, clients: Vec<ClientSnapshot>) -> Result<Self, SessionError> {
        if clients.is_empty() {
            return Err(SessionError::NoClients);
        }
        Ok(Self {
            id: SessionId::next(),
            world,
            clients: clients
                .into_iter()
                .map(|c| (c.actor.clone(), c))
                .collect(),
            buffer: CaptureBuffer::new(),
            pipeline: PersistPipeline::new(),
            current_tick: TickId(0),
            recording: false,
        })
    }

    /// Unique session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// World this session is bound to.
    pub fn world(&self) -> &WorldId {
        &self.world
    }

    /// Whether the session is actively capturing.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// The tick the next [`capture_tick`](Self::capture_tick) will close.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// The clients under recording.
    pub fn clients(&self) -> impl Iterator<Item = &ClientSnapshot> {
        self.clients.values()
    }

    /// Whether the given actor is one of this session's clients.
    pub fn has_client(&self, actor: &ActorId) -> bool {
        self.clients.contains_key(actor)
    }

    /// Look up one client's snapshot by actor.
    pub fn client(&self, actor: &ActorId) -> Option<&ClientSnapshot> {
        self.clients.get(actor)
    }

    /// Add a client mid-session (a player joining the recorded arena).
    ///
    /// Entries for the new actor are accepted from the next
    /// [`add_entry`](Self::add_entry) on. If the session is already
    /// recording, the snapshot is marked accordingly.
    pub fn add_client(&mut self, mut client: ClientSnapshot) {
        if self.recording && !client.is_recording() {
            client.toggle_recording();
        }
        self.clients.insert(client.actor.clone(), client);
    }

    /// Remove a client mid-session (a player leaving).
    ///
    /// The removed snapshot is no longer persisted; entries already
    /// flushed into the pipeline stay, and playback drops them at
    /// partition time.
    pub fn remove_client(&mut self, actor: &ActorId) -> Option<ClientSnapshot> {
        self.clients.shift_remove(actor)
    }

    /// Begin capturing. Marks every client as recording.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.recording {
            return Err(SessionError::AlreadyRecording);
        }
        for client in self.clients.values_mut() {
            if !client.is_recording() {
                client.toggle_recording();
            }
        }
        self.recording = true;
        Ok(())
    }

    /// Queue an entry for the current tick.
    ///
    /// Returns `Ok(false)` when the entry's actor is not one of the
    /// session's clients; such entries are not recorded.
    pub fn add_entry(&mut self, entry: DataEntry) -> Result<bool, SessionError> {
        if !self.recording {
            return Err(SessionError::NotRecording);
        }
        if !self.clients.contains_key(&entry.actor) {
            return Ok(false);
        }
        self.buffer.push(entry);
        Ok(true)
    }

    /// Close the current tick: flush the buffered entries into the
    /// persist pipeline and advance the tick counter.
    ///
    /// Returns the tick that was closed. Ticks with no entries are
    /// recorded too.
    pub fn capture_tick(&mut self) -> Result<TickId, SessionError> {
        if !self.recording {
            return Err(SessionError::NotRecording);
        }
        let closed = self.current_tick;
        let batch = self.buffer.flush();
        self.pipeline.add_tick(closed, batch)?;
        self.current_tick = closed.next();
        Ok(closed)
    }

    /// Stop capturing and compose the artifact on a worker thread.
    ///
    /// Any entries still buffered are flushed as one final tick. `extra`
    /// is caller context returned alongside the finished artifact.
    pub fn stop_and_save<M: Send + 'static>(
        mut self,
        extra: M,
    ) -> Result<PersistHandle<M>, SessionError> {
        if !self.recording {
            return Err(SessionError::NotRecording);
        }
        // Every client may have left mid-session; an artifact without
        // snapshots could never be played back, so refuse to save one.
        if self.clients.is_empty() {
            return Err(SessionError::NoClients);
        }
        if !self.buffer.is_empty() {
            let batch = self.buffer.flush();
            self.pipeline.add_tick(self.current_tick, batch)?;
        }
        for client in self.clients.values() {
            self.pipeline.add_client(client.clone())?;
        }
        Ok(self.pipeline.finalize(extra)?)
    }

    /// Stop capturing and throw the recording away. Consuming the
    /// session drops the buffer and the unfinalized pipeline; nothing
    /// is persisted.
    pub fn discard(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_core::{DamageCause, Rotation, Skin, Vec3};

    fn snapshot(name: &str) -> ClientSnapshot {
        ClientSnapshot::new(
            ActorId::from(name),
            Skin {
                id: format!("skin-{name}"),
                data: vec![0xab],
                cape: Vec::new(),
                geometry_name: "geometry.humanoid".to_string(),
                geometry_data: Vec::new(),
            },
            Vec3::zero(),
            Rotation::zero(),
            name.to_string(),
        )
    }

    fn session() -> RecordSession {
        RecordSession::new(WorldId::from("overworld"), vec![snapshot("steve")]).unwrap()
    }

    #[test]
    fn empty_client_list_is_rejected() {
        assert!(matches!(
            RecordSession::new(WorldId::from("overworld"), Vec::new()),
            Err(SessionError::NoClients)
        ));
    }

    #[test]
    fn entries_require_an_active_recording() {
        let mut session = session();
        let entry = DataEntry::take_damage(ActorId::from("steve"), 1.0, DamageCause::Fall);
        assert!(matches!(
            session.add_entry(entry.clone()),
            Err(SessionError::NotRecording)
        ));
        assert!(matches!(
            session.capture_tick(),
            Err(SessionError::NotRecording)
        ));

        session.start().unwrap();
        assert!(session.add_entry(entry).unwrap());
    }

    #[test]
    fn start_marks_clients_and_is_single_shot() {
        let mut session = session();
        session.start().unwrap();
        assert!(session.clients().all(ClientSnapshot::is_recording));
        assert!(matches!(
            session.start(),
            Err(SessionError::AlreadyRecording)
        ));
    }

    #[test]
    fn entries_from_strangers_are_not_recorded() {
        let mut session = session();
        session.start().unwrap();
        let stranger = DataEntry::take_damage(ActorId::from("herobrine"), 1.0, DamageCause::Magic);
        assert!(!session.add_entry(stranger).unwrap());
    }

    #[test]
    fn capture_tick_advances_and_keeps_empty_ticks() {
        let mut session = session();
        session.start().unwrap();
        assert_eq!(session.capture_tick().unwrap(), TickId(0));
        assert_eq!(session.capture_tick().unwrap(), TickId(1));
        assert_eq!(session.current_tick(), TickId(2));
    }

    #[test]
    fn stop_and_save_flushes_the_trailing_partial_tick() {
        let mut session = session();
        session.start().unwrap();
        session
            .add_entry(DataEntry::take_damage(
                ActorId::from("steve"),
                2.0,
                DamageCause::Fall,
            ))
            .unwrap();
        session.capture_tick().unwrap();
        // Buffered but never closed with capture_tick.
        session
            .add_entry(DataEntry::regain_health(
                ActorId::from("steve"),
                2.0,
                rewind_core::RegainReason::Magic,
            ))
            .unwrap();

        let store = session
            .stop_and_save(())
            .unwrap()
            .wait()
            .unwrap()
            .artifact
            .decode()
            .unwrap();
        assert_eq!(store.ticks().len(), 2);
        assert_eq!(store.entry_count(), 2);
        assert_eq!(store.clients().len(), 1);
        assert!(!store.clients()[0].is_recording());
    }

    #[test]
    fn clients_can_join_and_leave_mid_session() {
        let mut session = session();
        session.start().unwrap();

        session.add_client(snapshot("alex"));
        let alex = ActorId::from("alex");
        assert!(session.client(&alex).unwrap().is_recording());
        assert!(session
            .add_entry(DataEntry::take_damage(alex.clone(), 1.0, DamageCause::Fall))
            .unwrap());

        let removed = session.remove_client(&alex).unwrap();
        assert_eq!(removed.actor, alex);
        assert!(!session.has_client(&alex));
        assert!(!session
            .add_entry(DataEntry::take_damage(alex, 1.0, DamageCause::Fall))
            .unwrap());
    }

    #[test]
    fn saving_after_everyone_left_fails() {
        let mut session = session();
        session.start().unwrap();
        session.capture_tick().unwrap();
        session.remove_client(&ActorId::from("steve"));
        assert!(matches!(
            session.stop_and_save(()),
            Err(SessionError::NoClients)
        ));
    }

    #[test]
    fn discard_consumes_the_session_without_saving() {
        let mut session = session();
        session.start().unwrap();
        session
            .add_entry(DataEntry::take_damage(
                ActorId::from("steve"),
                1.0,
                DamageCause::Fall,
            ))
            .unwrap();
        session.capture_tick().unwrap();
        // No worker is spawned and no artifact exists; the session is
        // simply gone.
        session.discard();
    }

    #[test]
    fn stopping_an_idle_session_fails() {
        let session = session();
        assert!(matches!(
            session.stop_and_save(()),
            Err(SessionError::NotRecording)
        ));
    }
}

//! The top-level replay driver.

use indexmap::IndexMap;

use rewind_core::{ActorId, ClientSnapshot, RecordingStore};

use crate::actor::PlaybackActor;
use crate::error::PlaybackError;
use crate::script::partition;
use crate::sink::ActorSink;

/// Plays a decoded recording back through a set of actor sinks.
///
/// The host ticks the viewer once per simulation tick; the viewer
/// advances every live actor by `speed` steps per tick. Speed 2 is
/// double time, speed 1 real time. Pause drops the speed to zero and
/// remembers what to resume at.
#[derive(Debug)]
pub struct PlaybackViewer<S: ActorSink> {
    actors: IndexMap<ActorId, PlaybackActor<S>>,
    speed: u32,
    resume_speed: u32,
    started: bool,
}

impl<S: ActorSink> PlaybackViewer<S> {
    /// Build a viewer from a decoded recording.
    ///
    /// `make_sink` is called once per recorded client, in recorded
    /// order; the host spawns the puppet there (at the client's starting
    /// pose, wearing its skin) and returns the sink that controls it.
    pub fn new<F>(store: RecordingStore, mut make_sink: F) -> Result<Self, PlaybackError>
    where
        F: FnMut(&ClientSnapshot) -> S,
    {
        let (ticks, clients, _version) = store.into_parts();
        if clients.is_empty() {
            return Err(PlaybackError::NoClients);
        }

        let actor_ids: Vec<ActorId> = clients.iter().map(|c| c.actor.clone()).collect();
        let mut scripts = partition(ticks, &actor_ids);

        let mut actors = IndexMap::with_capacity(clients.len());
        for client in &clients {
            let script = scripts.shift_remove(&client.actor).unwrap_or_default();
            let sink = make_sink(client);
            actors.insert(
                client.actor.clone(),
                PlaybackActor::new(client.actor.clone(), script, sink),
            );
        }

        Ok(Self {
            actors,
            speed: 1,
            resume_speed: 1,
            started: false,
        })
    }

    /// Begin playback. Calling it again on a running viewer does
    /// nothing.
    pub fn play(&mut self) {
        self.started = true;
    }

    /// Whether any actor still has script left to replay.
    pub fn is_playing(&self) -> bool {
        self.started && self.actors.values().any(|a| !a.is_despawned())
    }

    /// Current steps-per-tick speed. Zero while paused.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Advance playback by one host tick: every live actor replays
    /// `speed` steps. Does nothing before [`play`](Self::play) or while
    /// paused.
    pub fn tick(&mut self) {
        if !self.started {
            return;
        }
        for _ in 0..self.speed {
            for actor in self.actors.values_mut() {
                actor.pulse();
            }
        }
    }

    /// Freeze playback, remembering the speed to resume at.
    pub fn pause(&mut self) {
        if self.speed > 0 {
            self.resume_speed = self.speed;
            self.speed = 0;
        }
    }

    /// Undo a pause. Does nothing if playback is not paused.
    pub fn resume(&mut self) {
        if self.speed == 0 {
            self.speed = self.resume_speed;
        }
    }

    /// Set the steps-per-tick speed directly. Zero means paused and is
    /// equivalent to [`pause`](Self::pause): the prior speed is kept
    /// for [`resume`](Self::resume).
    pub fn set_playback_speed(&mut self, speed: u32) {
        if speed == 0 {
            self.pause();
        } else {
            self.speed = speed;
        }
    }

    /// Nudge the speed up or down. Speed never drops below one.
    pub fn change_speed(&mut self, delta: i32) {
        let speed = i64::from(self.speed) + i64::from(delta);
        self.speed = u32::try_from(speed.max(1)).unwrap_or(u32::MAX);
    }

    /// End playback immediately: every live actor despawns and its
    /// remaining script is dropped.
    pub fn stop(&mut self) {
        for actor in self.actors.values_mut() {
            actor.terminate();
        }
        self.started = false;
    }

    /// One actor's replay state, for host-side queries.
    pub fn actor(&self, actor: &ActorId) -> Option<&PlaybackActor<S>> {
        self.actors.get(actor)
    }

    /// All replayed actors, in recorded client order.
    pub fn actors(&self) -> impl Iterator<Item = &PlaybackActor<S>> {
        self.actors.values()
    }
}

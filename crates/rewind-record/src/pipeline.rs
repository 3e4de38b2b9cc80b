//! Asynchronous persistence of finished recordings.
//!
//! Serializing and compressing a long session can take tens of
//! milliseconds, which is too long to spend on the simulation thread.
//! [`PersistPipeline`] accumulates the recording on the caller's thread
//! and, on [`finalize`](PersistPipeline::finalize), hands the whole
//! store to a worker thread that composes the compressed artifact and
//! delivers it back over a channel.

use std::thread;

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use indexmap::IndexMap;

use rewind_codec::{compose, Artifact, FORMAT_VERSION};
use rewind_core::{ClientSnapshot, DataEntry, RecordingStore, TickId};

use crate::error::PipelineError;

/// Accumulated recording state, present until finalization.
#[derive(Debug)]
struct Accum {
    ticks: IndexMap<TickId, Vec<DataEntry>>,
    clients: Vec<ClientSnapshot>,
}

/// Accumulates tick batches and client snapshots, then compresses the
/// whole recording off-thread.
///
/// Single-shot: after [`finalize`](Self::finalize) every mutator
/// returns [`PipelineError::AlreadyFinalized`].
#[derive(Debug)]
pub struct PersistPipeline {
    accum: Option<Accum>,
}

impl Default for PersistPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistPipeline {
    /// A fresh pipeline, ready to accumulate.
    pub fn new() -> Self {
        Self {
            accum: Some(Accum {
                ticks: IndexMap::new(),
                clients: Vec::new(),
            }),
        }
    }

    /// Record one tick's entry batch. Empty batches are kept; they
    /// preserve real time on playback.
    pub fn add_tick(
        &mut self,
        tick: TickId,
        entries: Vec<DataEntry>,
    ) -> Result<(), PipelineError> {
        let accum = self.accum.as_mut().ok_or(PipelineError::AlreadyFinalized)?;
        accum.ticks.insert(tick, entries);
        Ok(())
    }

    /// Record a client snapshot for the artifact's client section.
    pub fn add_client(&mut self, client: ClientSnapshot) -> Result<(), PipelineError> {
        let accum = self.accum.as_mut().ok_or(PipelineError::AlreadyFinalized)?;
        accum.clients.push(client);
        Ok(())
    }

    /// Number of ticks accumulated so far, or `None` once finalized.
    pub fn tick_count(&self) -> Option<usize> {
        self.accum.as_ref().map(|a| a.ticks.len())
    }

    /// Whether the pipeline has been finalized.
    pub fn is_finalized(&self) -> bool {
        self.accum.is_none()
    }

    /// Seal the recording and start composing the artifact on a worker
    /// thread.
    ///
    /// `extra` is caller context (save path, session metadata) carried
    /// through the worker and returned with the artifact. The transient
    /// recording flag is cleared from every snapshot before it is
    /// persisted.
    pub fn finalize<M: Send + 'static>(
        &mut self,
        extra: M,
    ) -> Result<PersistHandle<M>, PipelineError> {
        let mut accum = self.accum.take().ok_or(PipelineError::AlreadyFinalized)?;
        for client in &mut accum.clients {
            client.clear_recording();
        }
        let store = RecordingStore::from_parts(accum.ticks, accum.clients, FORMAT_VERSION);

        let (tx, rx) = bounded(1);
        thread::spawn(move || {
            let result = compose(&store)
                .map(|artifact| Composed { artifact, extra })
                .map_err(PipelineError::from);
            // The handle may have been dropped; nothing to do then.
            let _ = tx.send(result);
        });

        Ok(PersistHandle { rx })
    }
}

/// A finished artifact plus the caller context given to
/// [`PersistPipeline::finalize`].
#[derive(Debug)]
pub struct Composed<M> {
    /// The compressed recording.
    pub artifact: Artifact,
    /// Caller context carried through the worker.
    pub extra: M,
}

/// Receiving side of an in-flight persist job.
#[derive(Debug)]
pub struct PersistHandle<M> {
    rx: Receiver<Result<Composed<M>, PipelineError>>,
}

impl<M> PersistHandle<M> {
    /// Check for a finished artifact without blocking.
    ///
    /// `None` means the worker is still running; poll again next tick.
    pub fn try_poll(&self) -> Option<Result<Composed<M>, PipelineError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(PipelineError::WorkerLost)),
        }
    }

    /// Block until the worker delivers the artifact.
    pub fn wait(self) -> Result<Composed<M>, PipelineError> {
        self.rx.recv().map_err(|_| PipelineError::WorkerLost)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_core::{ActorId, DamageCause, Rotation, Skin, Vec3};

    fn snapshot(name: &str) -> ClientSnapshot {
        ClientSnapshot::new(
            ActorId::from(name),
            Skin {
                id: format!("skin-{name}"),
                data: vec![1, 2, 3],
                cape: Vec::new(),
                geometry_name: "geometry.humanoid".to_string(),
                geometry_data: Vec::new(),
            },
            Vec3::zero(),
            Rotation::zero(),
            name.to_string(),
        )
    }

    #[test]
    fn finalize_composes_a_decodable_artifact() {
        let mut pipeline = PersistPipeline::new();
        pipeline.add_client(snapshot("steve")).unwrap();
        pipeline
            .add_tick(
                TickId(0),
                vec![DataEntry::take_damage(
                    ActorId::from("steve"),
                    3.0,
                    DamageCause::Projectile,
                )],
            )
            .unwrap();
        pipeline.add_tick(TickId(1), Vec::new()).unwrap();

        let handle = pipeline.finalize("save-slot-1").unwrap();
        let composed = handle.wait().unwrap();
        assert_eq!(composed.extra, "save-slot-1");

        let store = composed.artifact.decode().unwrap();
        assert_eq!(store.ticks().len(), 2);
        assert_eq!(store.clients().len(), 1);
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn finalized_pipeline_rejects_further_input() {
        let mut pipeline = PersistPipeline::new();
        pipeline.add_tick(TickId(0), Vec::new()).unwrap();
        let handle = pipeline.finalize(()).unwrap();

        assert!(pipeline.is_finalized());
        assert!(matches!(
            pipeline.add_tick(TickId(1), Vec::new()),
            Err(PipelineError::AlreadyFinalized)
        ));
        assert!(matches!(
            pipeline.add_client(snapshot("x")),
            Err(PipelineError::AlreadyFinalized)
        ));
        assert!(matches!(
            pipeline.finalize(()),
            Err(PipelineError::AlreadyFinalized)
        ));
        handle.wait().unwrap();
    }

    #[test]
    fn recording_flag_is_cleared_before_persist() {
        let mut pipeline = PersistPipeline::new();
        let mut snap = snapshot("alex");
        snap.toggle_recording();
        pipeline.add_client(snap).unwrap();
        pipeline.add_tick(TickId(0), Vec::new()).unwrap();

        let composed = pipeline.finalize(()).unwrap().wait().unwrap();
        let store = composed.artifact.decode().unwrap();
        assert!(!store.clients()[0].is_recording());
    }

    #[test]
    fn try_poll_eventually_yields_the_artifact() {
        let mut pipeline = PersistPipeline::new();
        pipeline.add_tick(TickId(0), Vec::new()).unwrap();
        let handle = pipeline.finalize(()).unwrap();

        // Worker timing is not deterministic; spin until it reports.
        let composed = loop {
            if let Some(result) = handle.try_poll() {
                break result.unwrap();
            }
            thread::yield_now();
        };
        assert_eq!(composed.artifact.version(), FORMAT_VERSION);
    }
}

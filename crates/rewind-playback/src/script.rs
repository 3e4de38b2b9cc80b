//! Partitioning a recording into per-actor scripts.

use std::collections::VecDeque;

use indexmap::IndexMap;

use rewind_core::{ActorId, DataEntry, TickId};

/// One actor's share of a recording: a queue of entries per step.
///
/// Every recorded tick has a key here, including ticks where the actor
/// did nothing — empty steps are what keep playback running at real
/// time. A step key that is genuinely absent means the recording ended
/// (or was never captured) at that point, and the replay for this actor
/// terminates there.
#[derive(Debug, Default)]
pub struct PlaybackScript {
    steps: IndexMap<TickId, VecDeque<DataEntry>>,
}

impl PlaybackScript {
    /// Whether the script has a step at the given tick.
    pub fn contains(&self, step: TickId) -> bool {
        self.steps.contains_key(&step)
    }

    /// The earliest step in the script, where playback starts.
    pub fn first_step(&self) -> Option<TickId> {
        self.steps.keys().next().copied()
    }

    /// The queue for one step, for draining.
    pub fn step_mut(&mut self, step: TickId) -> Option<&mut VecDeque<DataEntry>> {
        self.steps.get_mut(&step)
    }

    /// Number of steps in the script.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the script has no steps at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Drop all remaining steps. Used when playback is stopped early.
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

/// Split a recording's tick lists into one script per actor.
///
/// Each actor's script gets a (possibly empty) step for every recorded
/// tick. Entries whose actor is not in `actors` are dropped; they
/// belong to nobody the viewer is re-enacting.
pub fn partition(
    ticks: IndexMap<TickId, Vec<DataEntry>>,
    actors: &[ActorId],
) -> IndexMap<ActorId, PlaybackScript> {
    let mut scripts: IndexMap<ActorId, PlaybackScript> = actors
        .iter()
        .map(|actor| (actor.clone(), PlaybackScript::default()))
        .collect();
    for script in scripts.values_mut() {
        for tick in ticks.keys() {
            script.steps.insert(*tick, VecDeque::new());
        }
    }
    for (tick, entries) in ticks {
        for entry in entries {
            if let Some(script) = scripts.get_mut(&entry.actor) {
                if let Some(queue) = script.steps.get_mut(&tick) {
                    queue.push_back(entry);
                }
            }
        }
    }
    scripts
}

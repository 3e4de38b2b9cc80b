//! Replaying one actor's script against its sink.

use indexmap::IndexMap;

use rewind_core::{ActorId, EntryPayload, InventoryKind, ItemPayload, TickId};

use crate::script::PlaybackScript;
use crate::sink::ActorSink;

/// Shelved inventory contents, held across a despawn/respawn pair.
#[derive(Debug, Default)]
struct Shelf {
    base: IndexMap<u32, ItemPayload>,
    armor: IndexMap<u32, ItemPayload>,
}

/// Drives one actor's puppet through its script, one step per pulse.
///
/// The step cursor starts at the script's earliest step and only ever
/// moves forward. A
/// pulse whose step has no entry in the script terminates the replay
/// for this actor: the recording holds a step for every captured tick,
/// so a missing key means the script is over (or was captured with a
/// gap, which reads the same way).
#[derive(Debug)]
pub struct PlaybackActor<S: ActorSink> {
    actor: ActorId,
    sink: S,
    script: PlaybackScript,
    step: TickId,
    despawned: bool,
    // Emulated inventory state, mirrored into the sink. Tracked here so
    // a keep-inventory despawn can restore it on the next respawn.
    base_inventory: IndexMap<u32, ItemPayload>,
    armor_inventory: IndexMap<u32, ItemPayload>,
    shelf: Option<Shelf>,
}

impl<S: ActorSink> PlaybackActor<S> {
    /// Pair an actor's script with the sink that will re-enact it. The
    /// cursor starts at the script's earliest step.
    pub fn new(actor: ActorId, script: PlaybackScript, sink: S) -> Self {
        let step = script.first_step().unwrap_or(TickId(0));
        Self {
            actor,
            sink,
            script,
            step,
            despawned: false,
            base_inventory: IndexMap::new(),
            armor_inventory: IndexMap::new(),
            shelf: None,
        }
    }

    /// The actor being re-enacted.
    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// The step the next pulse will replay.
    pub fn step(&self) -> TickId {
        self.step
    }

    /// Whether this actor's replay has finished.
    pub fn is_despawned(&self) -> bool {
        self.despawned
    }

    /// The sink, for host-side queries.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Replay one step: drain its queue in recorded order, then advance
    /// the cursor. If the new step has no entry in the script the actor
    /// despawns within the same pulse; the gap is the termination
    /// signal, not something to coast over.
    pub fn pulse(&mut self) {
        if self.despawned {
            return;
        }
        let Some(queue) = self.script.step_mut(self.step) else {
            self.terminate();
            return;
        };
        let entries: Vec<EntryPayload> = queue.drain(..).map(|e| e.payload).collect();
        for payload in entries {
            self.apply(payload);
        }
        self.step = self.step.next();
        if !self.script.contains(self.step) {
            self.terminate();
        }
    }

    /// Force the replay to its end state.
    pub fn terminate(&mut self) {
        if self.despawned {
            return;
        }
        self.sink.despawn();
        self.despawned = true;
        self.script.clear();
    }

    fn apply(&mut self, payload: EntryPayload) {
        match payload {
            EntryPayload::Transform {
                position,
                rotation,
                state,
                speed,
                teleport,
            } => {
                self.sink.set_movement_state(state);
                if teleport {
                    self.sink.set_pose(position, rotation);
                } else {
                    self.sink.queue_move(position, rotation, speed);
                }
            }
            EntryPayload::TakeDamage { damage, cause } => {
                self.sink.apply_damage(damage, cause);
            }
            EntryPayload::RegainHealth { amount, reason } => {
                self.sink.apply_heal(amount, reason);
            }
            EntryPayload::Animation {
                animation,
                duration,
            } => {
                self.sink.play_animation(animation, duration);
            }
            EntryPayload::BlockPlace {
                position,
                block_id,
                block_meta,
            } => {
                self.sink.set_block(position, block_id, block_meta);
            }
            EntryPayload::BlockBreak { position } => {
                self.sink.clear_block(position);
            }
            EntryPayload::InventoryEdit {
                inventory,
                slot,
                item,
            } => {
                self.sink.set_inventory_slot(inventory, slot, &item);
                match inventory {
                    InventoryKind::Base => self.base_inventory.insert(slot, item),
                    InventoryKind::Armor => self.armor_inventory.insert(slot, item),
                };
            }
            EntryPayload::ChestInteraction { position, action } => {
                self.sink.chest_event(position, action);
            }
            EntryPayload::SpawnState {
                spawned,
                keep_inventory,
            } => self.apply_spawn_state(spawned, keep_inventory),
            EntryPayload::Effect {
                effect_id,
                amplifier,
                duration,
                add,
            } => {
                if add {
                    self.sink.set_effect(effect_id, amplifier, duration);
                } else {
                    self.sink.remove_effect(effect_id);
                }
            }
        }
    }

    fn apply_spawn_state(&mut self, spawned: bool, keep_inventory: bool) {
        if spawned {
            self.sink.set_visible(true);
            if let Some(shelf) = self.shelf.take() {
                for (slot, item) in &shelf.base {
                    self.sink.set_inventory_slot(InventoryKind::Base, *slot, item);
                }
                for (slot, item) in &shelf.armor {
                    self.sink
                        .set_inventory_slot(InventoryKind::Armor, *slot, item);
                }
                self.base_inventory = shelf.base;
                self.armor_inventory = shelf.armor;
            }
        } else {
            self.sink.set_visible(false);
            if keep_inventory {
                self.shelf = Some(Shelf {
                    base: std::mem::take(&mut self.base_inventory),
                    armor: std::mem::take(&mut self.armor_inventory),
                });
            } else {
                self.base_inventory.clear();
                self.armor_inventory.clear();
                self.sink.clear_inventories();
            }
        }
    }
}

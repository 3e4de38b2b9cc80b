//! Test utilities and mock types for Rewind development.
//!
//! Provides a recording [`ActorSink`] mock ([`MockSink`]) plus fixture
//! builders for client snapshots and stores.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{sample_store, snapshot};

use rewind_core::{
    AnimationKind, ChestAction, DamageCause, InventoryKind, ItemPayload, MovementState,
    RegainReason, Rotation, Vec3,
};
use rewind_playback::ActorSink;

/// One recorded call on a [`MockSink`], with its arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum SinkCall {
    SetPose {
        position: Vec3,
        rotation: Rotation,
    },
    QueueMove {
        position: Vec3,
        rotation: Rotation,
        speed: f64,
    },
    SetMovementState(MovementState),
    ApplyDamage {
        damage: f64,
        cause: DamageCause,
    },
    ApplyHeal {
        amount: f64,
        reason: RegainReason,
    },
    PlayAnimation {
        animation: AnimationKind,
        duration: u32,
    },
    SetBlock {
        position: Vec3,
        block_id: u32,
        block_meta: u32,
    },
    ClearBlock {
        position: Vec3,
    },
    SetInventorySlot {
        inventory: InventoryKind,
        slot: u32,
        item: ItemPayload,
    },
    ClearInventories,
    ChestEvent {
        position: Vec3,
        action: ChestAction,
    },
    SetEffect {
        effect_id: u32,
        amplifier: u32,
        duration: u32,
    },
    RemoveEffect {
        effect_id: u32,
    },
    SetVisible(bool),
    Despawn,
}

/// Mock implementation of [`ActorSink`] that records every call in
/// order.
///
/// Assert against [`calls`](MockSink::calls) to verify both what was
/// replayed and in which order.
#[derive(Debug, Default)]
pub struct MockSink {
    calls: Vec<SinkCall>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// The most recent call, if any.
    pub fn last(&self) -> Option<&SinkCall> {
        self.calls.last()
    }

    /// Whether [`ActorSink::despawn`] has been called.
    pub fn saw_despawn(&self) -> bool {
        self.calls.contains(&SinkCall::Despawn)
    }
}

impl ActorSink for MockSink {
    fn set_pose(&mut self, position: Vec3, rotation: Rotation) {
        self.calls.push(SinkCall::SetPose { position, rotation });
    }

    fn queue_move(&mut self, position: Vec3, rotation: Rotation, speed: f64) {
        self.calls.push(SinkCall::QueueMove {
            position,
            rotation,
            speed,
        });
    }

    fn set_movement_state(&mut self, state: MovementState) {
        self.calls.push(SinkCall::SetMovementState(state));
    }

    fn apply_damage(&mut self, damage: f64, cause: DamageCause) {
        self.calls.push(SinkCall::ApplyDamage { damage, cause });
    }

    fn apply_heal(&mut self, amount: f64, reason: RegainReason) {
        self.calls.push(SinkCall::ApplyHeal { amount, reason });
    }

    fn play_animation(&mut self, animation: AnimationKind, duration: u32) {
        self.calls.push(SinkCall::PlayAnimation {
            animation,
            duration,
        });
    }

    fn set_block(&mut self, position: Vec3, block_id: u32, block_meta: u32) {
        self.calls.push(SinkCall::SetBlock {
            position,
            block_id,
            block_meta,
        });
    }

    fn clear_block(&mut self, position: Vec3) {
        self.calls.push(SinkCall::ClearBlock { position });
    }

    fn set_inventory_slot(&mut self, inventory: InventoryKind, slot: u32, item: &ItemPayload) {
        self.calls.push(SinkCall::SetInventorySlot {
            inventory,
            slot,
            item: item.clone(),
        });
    }

    fn clear_inventories(&mut self) {
        self.calls.push(SinkCall::ClearInventories);
    }

    fn chest_event(&mut self, position: Vec3, action: ChestAction) {
        self.calls.push(SinkCall::ChestEvent { position, action });
    }

    fn set_effect(&mut self, effect_id: u32, amplifier: u32, duration: u32) {
        self.calls.push(SinkCall::SetEffect {
            effect_id,
            amplifier,
            duration,
        });
    }

    fn remove_effect(&mut self, effect_id: u32) {
        self.calls.push(SinkCall::RemoveEffect { effect_id });
    }

    fn set_visible(&mut self, visible: bool) {
        self.calls.push(SinkCall::SetVisible(visible));
    }

    fn despawn(&mut self) {
        self.calls.push(SinkCall::Despawn);
    }
}

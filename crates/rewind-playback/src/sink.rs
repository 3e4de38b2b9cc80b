//! The host-side surface playback drives.

use rewind_core::{
    AnimationKind, ChestAction, DamageCause, InventoryKind, ItemPayload, MovementState,
    RegainReason, Rotation, Vec3,
};

/// Receives the visual effects of one replayed actor.
///
/// The host implements this over whatever puppet it spawns for the
/// actor (a fake player entity, usually). The engine guarantees calls
/// arrive in recorded order within a step; it never calls anything
/// after [`despawn`](Self::despawn).
pub trait ActorSink {
    /// Snap the puppet to a pose with no interpolation (teleport).
    fn set_pose(&mut self, position: Vec3, rotation: Rotation);

    /// Move the puppet towards a pose at the given speed.
    fn queue_move(&mut self, position: Vec3, rotation: Rotation, speed: f64);

    /// Update the puppet's movement state (sneaking, swimming).
    fn set_movement_state(&mut self, state: MovementState);

    /// Show the hurt flash and knockback for damage taken.
    fn apply_damage(&mut self, damage: f64, cause: DamageCause);

    /// Show health regained.
    fn apply_heal(&mut self, amount: f64, reason: RegainReason);

    /// Play a one-shot animation.
    fn play_animation(&mut self, animation: AnimationKind, duration: u32);

    /// Place a block in the viewed world.
    fn set_block(&mut self, position: Vec3, block_id: u32, block_meta: u32);

    /// Clear a block in the viewed world.
    fn clear_block(&mut self, position: Vec3);

    /// Put an item in one of the puppet's inventory slots.
    fn set_inventory_slot(&mut self, inventory: InventoryKind, slot: u32, item: &ItemPayload);

    /// Empty all of the puppet's inventories.
    fn clear_inventories(&mut self);

    /// Animate a chest lid at the given position.
    fn chest_event(&mut self, position: Vec3, action: ChestAction);

    /// Apply a status effect to the puppet.
    fn set_effect(&mut self, effect_id: u32, amplifier: u32, duration: u32);

    /// Remove a status effect from the puppet.
    fn remove_effect(&mut self, effect_id: u32);

    /// Show or hide the puppet (spawn/despawn transitions mid-script).
    fn set_visible(&mut self, visible: bool);

    /// Remove the puppet for good. Always the last call.
    fn despawn(&mut self);
}

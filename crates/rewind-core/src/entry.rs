//! The recorded-event data model.
//!
//! [`DataEntry`] is one discrete event belonging to one actor at one
//! step: an owner [`ActorId`] plus a closed [`EntryPayload`] sum. Each
//! payload enum has a stable raw value used on the wire; construction
//! from a raw value is range-checked and fails with [`EntryError`]
//! rather than clamping.

use std::fmt;

use crate::error::EntryError;
use crate::geom::{Rotation, Vec3};
use crate::id::ActorId;

/// Default movement speed recorded for walking transforms, in blocks
/// per tick (the host's 1/4 stride).
pub const DEFAULT_SPEED: f64 = 0.25;

/// Highest valid armor slot index (helmet, chest, legs, boots, offhand).
pub const MAX_ARMOR_SLOT: u32 = 4;

/// Discriminant tag identifying a [`DataEntry`] variant on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Movement or teleport.
    Transform,
    /// Damage taken.
    TakeDamage,
    /// Health regained.
    RegainHealth,
    /// Visual animation.
    Animation,
    /// Block placed.
    BlockPlace,
    /// Block broken.
    BlockBreak,
    /// Inventory slot changed.
    InventoryEdit,
    /// Chest opened or closed.
    ChestInteraction,
    /// Spawn or despawn transition.
    SpawnState,
    /// Status effect added or removed.
    Effect,
}

impl EntryKind {
    /// The wire tag for this variant.
    pub fn raw(self) -> u64 {
        match self {
            Self::Transform => 1,
            Self::TakeDamage => 2,
            Self::RegainHealth => 3,
            Self::Animation => 4,
            Self::BlockPlace => 5,
            Self::BlockBreak => 6,
            Self::InventoryEdit => 7,
            Self::ChestInteraction => 8,
            Self::SpawnState => 9,
            Self::Effect => 10,
        }
    }

    /// Resolve a wire tag back to a variant.
    pub fn from_raw(value: u64) -> Result<Self, EntryError> {
        match value {
            1 => Ok(Self::Transform),
            2 => Ok(Self::TakeDamage),
            3 => Ok(Self::RegainHealth),
            4 => Ok(Self::Animation),
            5 => Ok(Self::BlockPlace),
            6 => Ok(Self::BlockBreak),
            7 => Ok(Self::InventoryEdit),
            8 => Ok(Self::ChestInteraction),
            9 => Ok(Self::SpawnState),
            10 => Ok(Self::Effect),
            _ => Err(EntryError::InvalidEntryKind { value }),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transform => "transform",
            Self::TakeDamage => "take-damage",
            Self::RegainHealth => "regain-health",
            Self::Animation => "animation",
            Self::BlockPlace => "block-place",
            Self::BlockBreak => "block-break",
            Self::InventoryEdit => "inventory-edit",
            Self::ChestInteraction => "chest-interaction",
            Self::SpawnState => "spawn-state",
            Self::Effect => "effect",
        };
        write!(f, "{name}")
    }
}

/// How the actor was moving when a transform was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementState {
    /// Walking normally.
    Default,
    /// Sprinting.
    Sprint,
    /// Sneaking.
    Sneak,
}

impl MovementState {
    /// The wire value.
    pub fn raw(self) -> u64 {
        match self {
            Self::Default => 0,
            Self::Sprint => 1,
            Self::Sneak => 2,
        }
    }

    /// Resolve a wire value, rejecting anything out of range.
    pub fn from_raw(value: u64) -> Result<Self, EntryError> {
        match value {
            0 => Ok(Self::Default),
            1 => Ok(Self::Sprint),
            2 => Ok(Self::Sneak),
            _ => Err(EntryError::InvalidMovementState { value }),
        }
    }
}

/// Why damage was dealt. Mirrors the host's damage-cause table; the
/// raw values 0..=15 are the only accepted range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageCause {
    /// Contact with a harmful block.
    Contact,
    /// Melee attack by another entity.
    EntityAttack,
    /// Hit by a projectile.
    Projectile,
    /// Suffocating inside a block.
    Suffocation,
    /// Fall damage.
    Fall,
    /// Standing in fire.
    Fire,
    /// Burning after leaving fire.
    FireTick,
    /// Lava contact.
    Lava,
    /// Drowning.
    Drowning,
    /// Block explosion.
    BlockExplosion,
    /// Entity explosion.
    EntityExplosion,
    /// Falling into the void.
    Void,
    /// Self-inflicted.
    Suicide,
    /// Magic damage.
    Magic,
    /// Plugin-defined damage.
    Custom,
    /// Starvation.
    Starvation,
}

impl DamageCause {
    /// The wire value.
    pub fn raw(self) -> u64 {
        match self {
            Self::Contact => 0,
            Self::EntityAttack => 1,
            Self::Projectile => 2,
            Self::Suffocation => 3,
            Self::Fall => 4,
            Self::Fire => 5,
            Self::FireTick => 6,
            Self::Lava => 7,
            Self::Drowning => 8,
            Self::BlockExplosion => 9,
            Self::EntityExplosion => 10,
            Self::Void => 11,
            Self::Suicide => 12,
            Self::Magic => 13,
            Self::Custom => 14,
            Self::Starvation => 15,
        }
    }

    /// Resolve a wire value, rejecting anything out of range.
    pub fn from_raw(value: u64) -> Result<Self, EntryError> {
        match value {
            0 => Ok(Self::Contact),
            1 => Ok(Self::EntityAttack),
            2 => Ok(Self::Projectile),
            3 => Ok(Self::Suffocation),
            4 => Ok(Self::Fall),
            5 => Ok(Self::Fire),
            6 => Ok(Self::FireTick),
            7 => Ok(Self::Lava),
            8 => Ok(Self::Drowning),
            9 => Ok(Self::BlockExplosion),
            10 => Ok(Self::EntityExplosion),
            11 => Ok(Self::Void),
            12 => Ok(Self::Suicide),
            13 => Ok(Self::Magic),
            14 => Ok(Self::Custom),
            15 => Ok(Self::Starvation),
            _ => Err(EntryError::InvalidDamageCause { value }),
        }
    }
}

/// Why health was regained. Raw values 0..=4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegainReason {
    /// Natural regeneration.
    Regen,
    /// Eating.
    Eating,
    /// Magic (potion, beacon).
    Magic,
    /// Plugin-defined.
    Custom,
    /// Saturation.
    Saturation,
}

impl RegainReason {
    /// The wire value.
    pub fn raw(self) -> u64 {
        match self {
            Self::Regen => 0,
            Self::Eating => 1,
            Self::Magic => 2,
            Self::Custom => 3,
            Self::Saturation => 4,
        }
    }

    /// Resolve a wire value, rejecting anything out of range.
    pub fn from_raw(value: u64) -> Result<Self, EntryError> {
        match value {
            0 => Ok(Self::Regen),
            1 => Ok(Self::Eating),
            2 => Ok(Self::Magic),
            3 => Ok(Self::Custom),
            4 => Ok(Self::Saturation),
            _ => Err(EntryError::InvalidRegainReason { value }),
        }
    }
}

/// A visual animation the actor performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Arm swing (attack, block interaction).
    SwingArm,
    /// Consuming a held item.
    ConsumeItem,
}

impl AnimationKind {
    /// The wire value.
    pub fn raw(self) -> u64 {
        match self {
            Self::SwingArm => 0,
            Self::ConsumeItem => 1,
        }
    }

    /// Resolve a wire value, rejecting anything out of range.
    pub fn from_raw(value: u64) -> Result<Self, EntryError> {
        match value {
            0 => Ok(Self::SwingArm),
            1 => Ok(Self::ConsumeItem),
            _ => Err(EntryError::InvalidAnimation { value }),
        }
    }
}

/// Which of the actor's inventories an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InventoryKind {
    /// The main inventory.
    Base,
    /// The armor inventory.
    Armor,
}

impl InventoryKind {
    /// The wire value.
    pub fn raw(self) -> u64 {
        match self {
            Self::Base => 0,
            Self::Armor => 1,
        }
    }

    /// Resolve a wire value, rejecting anything out of range.
    pub fn from_raw(value: u64) -> Result<Self, EntryError> {
        match value {
            0 => Ok(Self::Base),
            1 => Ok(Self::Armor),
            _ => Err(EntryError::InvalidInventory { value }),
        }
    }
}

/// Opening or closing a chest.
///
/// The raw values continue the block-action value space (break 0,
/// place 1), so open is 2 and close is 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChestAction {
    /// Lid opened.
    Open,
    /// Lid closed.
    Close,
}

impl ChestAction {
    /// The wire value.
    pub fn raw(self) -> u64 {
        match self {
            Self::Open => 2,
            Self::Close => 3,
        }
    }

    /// Resolve a wire value, rejecting anything out of range.
    pub fn from_raw(value: u64) -> Result<Self, EntryError> {
        match value {
            2 => Ok(Self::Open),
            3 => Ok(Self::Close),
            _ => Err(EntryError::InvalidChestAction { value }),
        }
    }
}

/// An item in the host's own serialized form.
///
/// The core never inspects this; it is captured from the host, carried
/// through the container verbatim, and handed back to the actor sink
/// at playback.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemPayload(pub String);

impl From<&str> for ItemPayload {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

/// The per-variant payload of a [`DataEntry`].
#[derive(Clone, Debug, PartialEq)]
pub enum EntryPayload {
    /// Movement, look change, or teleport.
    Transform {
        /// Target position.
        position: Vec3,
        /// Target view direction.
        rotation: Rotation,
        /// Movement state at capture time.
        state: MovementState,
        /// Movement speed in blocks per tick.
        speed: f64,
        /// Hard teleport instead of interpolated movement.
        teleport: bool,
    },
    /// Damage taken.
    TakeDamage {
        /// Final damage amount.
        damage: f64,
        /// Why the damage was dealt.
        cause: DamageCause,
    },
    /// Health regained.
    RegainHealth {
        /// Amount regained.
        amount: f64,
        /// Why health was regained.
        reason: RegainReason,
    },
    /// Visual animation.
    Animation {
        /// Which animation.
        animation: AnimationKind,
        /// Duration in ticks (0 = host default).
        duration: u32,
    },
    /// Block placed.
    BlockPlace {
        /// Block position.
        position: Vec3,
        /// Placed block id.
        block_id: u32,
        /// Placed block metadata.
        block_meta: u32,
    },
    /// Block broken.
    BlockBreak {
        /// Block position.
        position: Vec3,
    },
    /// Inventory slot changed.
    InventoryEdit {
        /// Which inventory.
        inventory: InventoryKind,
        /// Slot index within that inventory.
        slot: u32,
        /// New slot contents, host-serialized.
        item: ItemPayload,
    },
    /// Chest opened or closed.
    ChestInteraction {
        /// Chest block position.
        position: Vec3,
        /// Open or close.
        action: ChestAction,
    },
    /// Spawn or despawn transition.
    SpawnState {
        /// `true` when (re)spawning, `false` when despawning.
        spawned: bool,
        /// On despawn, whether inventory contents are kept for the
        /// next respawn.
        keep_inventory: bool,
    },
    /// Status effect added or removed.
    Effect {
        /// Host effect id.
        effect_id: u32,
        /// Effect amplifier level.
        amplifier: u32,
        /// Duration in ticks.
        duration: u32,
        /// `true` to add the effect, `false` to remove it.
        add: bool,
    },
}

impl EntryPayload {
    /// The discriminant tag for this payload.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Transform { .. } => EntryKind::Transform,
            Self::TakeDamage { .. } => EntryKind::TakeDamage,
            Self::RegainHealth { .. } => EntryKind::RegainHealth,
            Self::Animation { .. } => EntryKind::Animation,
            Self::BlockPlace { .. } => EntryKind::BlockPlace,
            Self::BlockBreak { .. } => EntryKind::BlockBreak,
            Self::InventoryEdit { .. } => EntryKind::InventoryEdit,
            Self::ChestInteraction { .. } => EntryKind::ChestInteraction,
            Self::SpawnState { .. } => EntryKind::SpawnState,
            Self::Effect { .. } => EntryKind::Effect,
        }
    }
}

/// One recorded discrete event belonging to one actor.
#[derive(Clone, Debug, PartialEq)]
pub struct DataEntry {
    /// The actor this entry was recorded for.
    pub actor: ActorId,
    /// The event itself.
    pub payload: EntryPayload,
}

impl DataEntry {
    /// Construct an entry from an already-validated payload.
    pub fn new(actor: ActorId, payload: EntryPayload) -> Self {
        Self { actor, payload }
    }

    /// The discriminant tag of this entry's payload.
    pub fn kind(&self) -> EntryKind {
        self.payload.kind()
    }

    /// A movement transform at walking speed.
    pub fn transform(
        actor: ActorId,
        position: Vec3,
        rotation: Rotation,
        state: MovementState,
    ) -> Self {
        Self::new(
            actor,
            EntryPayload::Transform {
                position,
                rotation,
                state,
                speed: DEFAULT_SPEED,
                teleport: false,
            },
        )
    }

    /// A hard teleport transform (speed 0, no interpolation).
    pub fn teleport(actor: ActorId, position: Vec3, rotation: Rotation) -> Self {
        Self::new(
            actor,
            EntryPayload::Transform {
                position,
                rotation,
                state: MovementState::Default,
                speed: 0.0,
                teleport: true,
            },
        )
    }

    /// Damage taken.
    pub fn take_damage(actor: ActorId, damage: f64, cause: DamageCause) -> Self {
        Self::new(actor, EntryPayload::TakeDamage { damage, cause })
    }

    /// Health regained.
    pub fn regain_health(actor: ActorId, amount: f64, reason: RegainReason) -> Self {
        Self::new(actor, EntryPayload::RegainHealth { amount, reason })
    }

    /// A visual animation.
    pub fn animation(actor: ActorId, animation: AnimationKind, duration: u32) -> Self {
        Self::new(
            actor,
            EntryPayload::Animation {
                animation,
                duration,
            },
        )
    }

    /// A block placed.
    pub fn block_place(actor: ActorId, position: Vec3, block_id: u32, block_meta: u32) -> Self {
        Self::new(
            actor,
            EntryPayload::BlockPlace {
                position,
                block_id,
                block_meta,
            },
        )
    }

    /// A block broken.
    pub fn block_break(actor: ActorId, position: Vec3) -> Self {
        Self::new(actor, EntryPayload::BlockBreak { position })
    }

    /// An inventory slot change.
    ///
    /// Fails if an armor edit targets a slot beyond [`MAX_ARMOR_SLOT`];
    /// the armor inventory has a fixed slot count and a larger index is
    /// a data-integrity error, not something to clamp.
    pub fn inventory_edit(
        actor: ActorId,
        inventory: InventoryKind,
        slot: u32,
        item: ItemPayload,
    ) -> Result<Self, EntryError> {
        if inventory == InventoryKind::Armor && slot > MAX_ARMOR_SLOT {
            return Err(EntryError::ArmorSlotOutOfRange { slot });
        }
        Ok(Self::new(
            actor,
            EntryPayload::InventoryEdit {
                inventory,
                slot,
                item,
            },
        ))
    }

    /// A chest opened or closed.
    pub fn chest_interaction(actor: ActorId, position: Vec3, action: ChestAction) -> Self {
        Self::new(actor, EntryPayload::ChestInteraction { position, action })
    }

    /// A spawn or despawn transition.
    pub fn spawn_state(actor: ActorId, spawned: bool, keep_inventory: bool) -> Self {
        Self::new(
            actor,
            EntryPayload::SpawnState {
                spawned,
                keep_inventory,
            },
        )
    }

    /// A status effect change.
    pub fn effect(actor: ActorId, effect_id: u32, amplifier: u32, duration: u32, add: bool) -> Self {
        Self::new(
            actor,
            EntryPayload::Effect {
                effect_id,
                amplifier,
                duration,
                add,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_kind_raw_round_trips() {
        for tag in 1..=10 {
            let kind = EntryKind::from_raw(tag).unwrap();
            assert_eq!(kind.raw(), tag);
        }
    }

    #[test]
    fn entry_kind_rejects_unknown_tags() {
        assert!(EntryKind::from_raw(0).is_err());
        assert!(EntryKind::from_raw(11).is_err());
    }

    #[test]
    fn damage_cause_boundary_values() {
        assert_eq!(DamageCause::from_raw(0).unwrap(), DamageCause::Contact);
        assert_eq!(DamageCause::from_raw(15).unwrap(), DamageCause::Starvation);
        assert_eq!(
            DamageCause::from_raw(16),
            Err(EntryError::InvalidDamageCause { value: 16 })
        );
    }

    #[test]
    fn regain_reason_boundary_values() {
        assert_eq!(RegainReason::from_raw(4).unwrap(), RegainReason::Saturation);
        assert!(RegainReason::from_raw(5).is_err());
    }

    #[test]
    fn movement_state_rejects_out_of_range() {
        assert!(MovementState::from_raw(3).is_err());
    }

    #[test]
    fn chest_action_uses_block_action_values() {
        assert_eq!(ChestAction::Open.raw(), 2);
        assert_eq!(ChestAction::Close.raw(), 3);
        assert!(ChestAction::from_raw(0).is_err());
        assert!(ChestAction::from_raw(1).is_err());
    }

    #[test]
    fn armor_edit_rejects_bad_slot() {
        let err = DataEntry::inventory_edit(
            ActorId::from("steve"),
            InventoryKind::Armor,
            5,
            ItemPayload::from("{}"),
        )
        .unwrap_err();
        assert_eq!(err, EntryError::ArmorSlotOutOfRange { slot: 5 });
    }

    #[test]
    fn base_edit_accepts_any_slot() {
        assert!(DataEntry::inventory_edit(
            ActorId::from("steve"),
            InventoryKind::Base,
            35,
            ItemPayload::from("{}"),
        )
        .is_ok());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn armor_slot_validation_matches_the_bound(slot in any::<u32>()) {
                let result = DataEntry::inventory_edit(
                    ActorId::from("steve"),
                    InventoryKind::Armor,
                    slot,
                    ItemPayload::from("{}"),
                );
                prop_assert_eq!(result.is_ok(), slot <= MAX_ARMOR_SLOT);
            }

            #[test]
            fn entry_kind_raw_is_stable(raw in 1u64..=10) {
                let kind = EntryKind::from_raw(raw).unwrap();
                prop_assert_eq!(kind.raw(), raw);
            }

            #[test]
            fn out_of_range_kinds_are_rejected(raw in 11u64..) {
                prop_assert!(EntryKind::from_raw(raw).is_err());
            }
        }
    }
}

//! Tag-keyed encode/decode for [`DataEntry`].
//!
//! One decoder per entry-type tag, selected by the common `"0"` tag.
//! Each decoder independently validates its required keys and enum
//! ranges; any miss is a `Malformed` error that the caller must treat
//! as fatal to the whole batch.

use serde_json::{Map, Value};

use rewind_core::{
    ActorId, AnimationKind, ChestAction, DamageCause, DataEntry, EntryKind, EntryPayload,
    InventoryKind, ItemPayload, MovementState, RegainReason,
};

use crate::error::CodecError;
use crate::tags;
use crate::value::{
    decode_rotation, decode_vec3, encode_rotation, encode_vec3, get_bool, get_f64, get_map,
    get_str, get_u32, get_u64, num_f64,
};

/// Encode an entry into its tag-keyed object form.
///
/// Total and lossless for every valid entry; the only failure mode is a
/// non-finite float, which has no JSON representation.
pub fn encode_entry(entry: &DataEntry) -> Result<Value, CodecError> {
    let kind = entry.kind();
    let what = kind.to_string();
    let mut map = Map::new();
    map.insert(
        tags::entry::ENTRY_TYPE.to_string(),
        Value::from(kind.raw()),
    );
    map.insert(
        tags::entry::ACTOR_ID.to_string(),
        Value::from(entry.actor.as_str()),
    );

    match &entry.payload {
        EntryPayload::Transform {
            position,
            rotation,
            state,
            speed,
            teleport,
        } => {
            map.insert(
                tags::transform::POSITION.to_string(),
                encode_vec3(*position, &what)?,
            );
            map.insert(
                tags::transform::ROTATION.to_string(),
                encode_rotation(*rotation, &what)?,
            );
            map.insert(tags::transform::STATE.to_string(), Value::from(state.raw()));
            map.insert(tags::transform::SPEED.to_string(), num_f64(*speed, &what)?);
            map.insert(
                tags::transform::TELEPORT.to_string(),
                Value::from(*teleport),
            );
        }
        EntryPayload::TakeDamage { damage, cause } => {
            map.insert(
                tags::take_damage::DAMAGE.to_string(),
                num_f64(*damage, &what)?,
            );
            map.insert(
                tags::take_damage::CAUSE.to_string(),
                Value::from(cause.raw()),
            );
        }
        EntryPayload::RegainHealth { amount, reason } => {
            map.insert(
                tags::regain_health::AMOUNT.to_string(),
                num_f64(*amount, &what)?,
            );
            map.insert(
                tags::regain_health::REASON.to_string(),
                Value::from(reason.raw()),
            );
        }
        EntryPayload::Animation {
            animation,
            duration,
        } => {
            map.insert(
                tags::animation::ANIMATION.to_string(),
                Value::from(animation.raw()),
            );
            map.insert(tags::animation::DURATION.to_string(), Value::from(*duration));
        }
        EntryPayload::BlockPlace {
            position,
            block_id,
            block_meta,
        } => {
            map.insert(
                tags::block::POSITION.to_string(),
                encode_vec3(*position, &what)?,
            );
            map.insert(tags::block::BLOCK_ID.to_string(), Value::from(*block_id));
            map.insert(tags::block::BLOCK_META.to_string(), Value::from(*block_meta));
        }
        EntryPayload::BlockBreak { position } => {
            map.insert(
                tags::block::POSITION.to_string(),
                encode_vec3(*position, &what)?,
            );
        }
        EntryPayload::InventoryEdit {
            inventory,
            slot,
            item,
        } => {
            map.insert(
                tags::inventory_edit::INVENTORY.to_string(),
                Value::from(inventory.raw()),
            );
            map.insert(tags::inventory_edit::SLOT.to_string(), Value::from(*slot));
            map.insert(
                tags::inventory_edit::ITEM.to_string(),
                Value::from(item.0.as_str()),
            );
        }
        EntryPayload::ChestInteraction { position, action } => {
            map.insert(
                tags::chest::POSITION.to_string(),
                encode_vec3(*position, &what)?,
            );
            map.insert(tags::chest::ACTION.to_string(), Value::from(action.raw()));
        }
        EntryPayload::SpawnState {
            spawned,
            keep_inventory,
        } => {
            map.insert(tags::spawn_state::SPAWNED.to_string(), Value::from(*spawned));
            map.insert(
                tags::spawn_state::KEEP_INVENTORY.to_string(),
                Value::from(*keep_inventory),
            );
        }
        EntryPayload::Effect {
            effect_id,
            amplifier,
            duration,
            add,
        } => {
            map.insert(tags::effect::EFFECT_ID.to_string(), Value::from(*effect_id));
            map.insert(tags::effect::AMPLIFIER.to_string(), Value::from(*amplifier));
            map.insert(tags::effect::DURATION.to_string(), Value::from(*duration));
            map.insert(tags::effect::ADD.to_string(), Value::from(*add));
        }
    }

    Ok(Value::Object(map))
}

/// Decode a tag-keyed object back into an entry.
///
/// `decode(encode(x)) == x` for every valid `x`. A missing key, a
/// wrong-typed value, or an out-of-range enum raw fails with
/// `Malformed`; nothing is defaulted or clamped.
pub fn decode_entry(value: &Value) -> Result<DataEntry, CodecError> {
    let map = value
        .as_object()
        .ok_or_else(|| CodecError::malformed("entry is not an object"))?;

    let tag = get_u64(map, tags::entry::ENTRY_TYPE, "entry")?;
    let kind = EntryKind::from_raw(tag).map_err(|e| CodecError::malformed(e.to_string()))?;
    let what = kind.to_string();
    let actor = ActorId::from(get_str(map, tags::entry::ACTOR_ID, &what)?);

    let payload = match kind {
        EntryKind::Transform => decode_transform(map, &what)?,
        EntryKind::TakeDamage => decode_take_damage(map, &what)?,
        EntryKind::RegainHealth => decode_regain_health(map, &what)?,
        EntryKind::Animation => decode_animation(map, &what)?,
        EntryKind::BlockPlace => decode_block_place(map, &what)?,
        EntryKind::BlockBreak => decode_block_break(map, &what)?,
        EntryKind::InventoryEdit => decode_inventory_edit(map, &what)?,
        EntryKind::ChestInteraction => decode_chest_interaction(map, &what)?,
        EntryKind::SpawnState => decode_spawn_state(map, &what)?,
        EntryKind::Effect => decode_effect(map, &what)?,
    };

    Ok(DataEntry::new(actor, payload))
}

fn range(e: rewind_core::EntryError) -> CodecError {
    CodecError::malformed(e.to_string())
}

fn decode_transform(map: &Map<String, Value>, what: &str) -> Result<EntryPayload, CodecError> {
    let position = decode_vec3(get_map(map, tags::transform::POSITION, what)?, what)?;
    let rotation = decode_rotation(get_map(map, tags::transform::ROTATION, what)?, what)?;
    let state =
        MovementState::from_raw(get_u64(map, tags::transform::STATE, what)?).map_err(range)?;
    let speed = get_f64(map, tags::transform::SPEED, what)?;
    let teleport = get_bool(map, tags::transform::TELEPORT, what)?;
    Ok(EntryPayload::Transform {
        position,
        rotation,
        state,
        speed,
        teleport,
    })
}

fn decode_take_damage(map: &Map<String, Value>, what: &str) -> Result<EntryPayload, CodecError> {
    let damage = get_f64(map, tags::take_damage::DAMAGE, what)?;
    let cause =
        DamageCause::from_raw(get_u64(map, tags::take_damage::CAUSE, what)?).map_err(range)?;
    Ok(EntryPayload::TakeDamage { damage, cause })
}

fn decode_regain_health(map: &Map<String, Value>, what: &str) -> Result<EntryPayload, CodecError> {
    let amount = get_f64(map, tags::regain_health::AMOUNT, what)?;
    let reason =
        RegainReason::from_raw(get_u64(map, tags::regain_health::REASON, what)?).map_err(range)?;
    Ok(EntryPayload::RegainHealth { amount, reason })
}

fn decode_animation(map: &Map<String, Value>, what: &str) -> Result<EntryPayload, CodecError> {
    let animation =
        AnimationKind::from_raw(get_u64(map, tags::animation::ANIMATION, what)?).map_err(range)?;
    let duration = get_u32(map, tags::animation::DURATION, what)?;
    Ok(EntryPayload::Animation {
        animation,
        duration,
    })
}

fn decode_block_place(map: &Map<String, Value>, what: &str) -> Result<EntryPayload, CodecError> {
    let position = decode_vec3(get_map(map, tags::block::POSITION, what)?, what)?;
    let block_id = get_u32(map, tags::block::BLOCK_ID, what)?;
    let block_meta = get_u32(map, tags::block::BLOCK_META, what)?;
    Ok(EntryPayload::BlockPlace {
        position,
        block_id,
        block_meta,
    })
}

fn decode_block_break(map: &Map<String, Value>, what: &str) -> Result<EntryPayload, CodecError> {
    let position = decode_vec3(get_map(map, tags::block::POSITION, what)?, what)?;
    Ok(EntryPayload::BlockBreak { position })
}

fn decode_inventory_edit(map: &Map<String, Value>, what: &str) -> Result<EntryPayload, CodecError> {
    let inventory = InventoryKind::from_raw(get_u64(map, tags::inventory_edit::INVENTORY, what)?)
        .map_err(range)?;
    let slot = get_u32(map, tags::inventory_edit::SLOT, what)?;
    let item = ItemPayload(get_str(map, tags::inventory_edit::ITEM, what)?.to_string());
    // Same slot validation as capture-time construction.
    if inventory == InventoryKind::Armor && slot > rewind_core::entry::MAX_ARMOR_SLOT {
        return Err(range(rewind_core::EntryError::ArmorSlotOutOfRange { slot }));
    }
    Ok(EntryPayload::InventoryEdit {
        inventory,
        slot,
        item,
    })
}

fn decode_chest_interaction(
    map: &Map<String, Value>,
    what: &str,
) -> Result<EntryPayload, CodecError> {
    let position = decode_vec3(get_map(map, tags::chest::POSITION, what)?, what)?;
    let action = ChestAction::from_raw(get_u64(map, tags::chest::ACTION, what)?).map_err(range)?;
    Ok(EntryPayload::ChestInteraction { position, action })
}

fn decode_spawn_state(map: &Map<String, Value>, what: &str) -> Result<EntryPayload, CodecError> {
    let spawned = get_bool(map, tags::spawn_state::SPAWNED, what)?;
    let keep_inventory = get_bool(map, tags::spawn_state::KEEP_INVENTORY, what)?;
    Ok(EntryPayload::SpawnState {
        spawned,
        keep_inventory,
    })
}

fn decode_effect(map: &Map<String, Value>, what: &str) -> Result<EntryPayload, CodecError> {
    let effect_id = get_u32(map, tags::effect::EFFECT_ID, what)?;
    let amplifier = get_u32(map, tags::effect::AMPLIFIER, what)?;
    let duration = get_u32(map, tags::effect::DURATION, what)?;
    let add = get_bool(map, tags::effect::ADD, what)?;
    Ok(EntryPayload::Effect {
        effect_id,
        amplifier,
        duration,
        add,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_core::{Rotation, Vec3};

    fn actor() -> ActorId {
        ActorId::from("steve")
    }

    /// One representative entry per variant, boundary enums included.
    fn samples() -> Vec<DataEntry> {
        vec![
            DataEntry::transform(
                actor(),
                Vec3::new(1.5, 64.0, -7.25),
                Rotation::new(180.0, -45.0),
                MovementState::Sneak,
            ),
            DataEntry::teleport(actor(), Vec3::zero(), Rotation::zero()),
            DataEntry::take_damage(actor(), 2.0, DamageCause::Contact),
            DataEntry::take_damage(actor(), 19.5, DamageCause::Starvation),
            DataEntry::regain_health(actor(), 1.0, RegainReason::Regen),
            DataEntry::regain_health(actor(), 4.0, RegainReason::Saturation),
            DataEntry::animation(actor(), AnimationKind::SwingArm, 0),
            DataEntry::animation(actor(), AnimationKind::ConsumeItem, 30),
            DataEntry::block_place(actor(), Vec3::new(10.0, 70.0, 10.0), 1, 2),
            DataEntry::block_break(actor(), Vec3::new(-3.0, 12.0, 8.0)),
            DataEntry::inventory_edit(
                actor(),
                InventoryKind::Armor,
                4,
                ItemPayload::from(r#"{"id":310}"#),
            )
            .unwrap(),
            DataEntry::chest_interaction(actor(), Vec3::new(0.0, 5.0, 0.0), ChestAction::Open),
            DataEntry::chest_interaction(actor(), Vec3::new(0.0, 5.0, 0.0), ChestAction::Close),
            DataEntry::spawn_state(actor(), false, true),
            DataEntry::spawn_state(actor(), true, false),
            DataEntry::effect(actor(), 2, 1, 600, true),
            DataEntry::effect(actor(), 2, 1, 0, false),
        ]
    }

    #[test]
    fn every_variant_round_trips() {
        for entry in samples() {
            let encoded = encode_entry(&entry).unwrap();
            let decoded = decode_entry(&encoded).unwrap();
            assert_eq!(decoded, entry, "round-trip mismatch for {}", entry.kind());
        }
    }

    #[test]
    fn dropping_any_key_is_malformed() {
        for entry in samples() {
            let encoded = encode_entry(&entry).unwrap();
            let map = encoded.as_object().unwrap();
            for key in map.keys() {
                let mut pruned = map.clone();
                pruned.remove(key);
                let result = decode_entry(&Value::Object(pruned));
                assert!(
                    matches!(result, Err(CodecError::Malformed { .. })),
                    "{} decode succeeded without tag {key}",
                    entry.kind()
                );
            }
        }
    }

    #[test]
    fn out_of_range_cause_is_malformed() {
        let entry = DataEntry::take_damage(actor(), 1.0, DamageCause::Fall);
        let encoded = encode_entry(&entry).unwrap();
        let mut map = encoded.as_object().unwrap().clone();
        map.insert(tags::take_damage::CAUSE.to_string(), Value::from(16u64));
        assert!(matches!(
            decode_entry(&Value::Object(map)),
            Err(CodecError::Malformed { .. })
        ));
    }

    #[test]
    fn unknown_entry_type_is_malformed() {
        let mut map = Map::new();
        map.insert(tags::entry::ENTRY_TYPE.to_string(), Value::from(99u64));
        map.insert(tags::entry::ACTOR_ID.to_string(), Value::from("steve"));
        assert!(matches!(
            decode_entry(&Value::Object(map)),
            Err(CodecError::Malformed { .. })
        ));
    }

    #[test]
    fn stored_armor_slot_out_of_range_is_malformed() {
        let entry = DataEntry::inventory_edit(
            actor(),
            InventoryKind::Armor,
            0,
            ItemPayload::from("{}"),
        )
        .unwrap();
        let encoded = encode_entry(&entry).unwrap();
        let mut map = encoded.as_object().unwrap().clone();
        map.insert(tags::inventory_edit::SLOT.to_string(), Value::from(9u64));
        assert!(matches!(
            decode_entry(&Value::Object(map)),
            Err(CodecError::Malformed { .. })
        ));
    }

    #[test]
    fn non_finite_speed_fails_encode() {
        let mut entry = DataEntry::transform(
            actor(),
            Vec3::zero(),
            Rotation::zero(),
            MovementState::Default,
        );
        if let EntryPayload::Transform { speed, .. } = &mut entry.payload {
            *speed = f64::NAN;
        }
        assert!(matches!(
            encode_entry(&entry),
            Err(CodecError::Serialize { .. })
        ));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn arb_finite() -> impl Strategy<Value = f64> {
            // Keep magnitudes representable exactly enough that a JSON
            // round trip is bit-identical.
            -1.0e9..1.0e9f64
        }

        fn arb_vec3() -> impl Strategy<Value = Vec3> {
            (arb_finite(), arb_finite(), arb_finite())
                .prop_map(|(x, y, z)| Vec3::new(x, y, z))
        }

        proptest! {
            #[test]
            fn transform_round_trips(
                position in arb_vec3(),
                yaw in -360.0..360.0f64,
                pitch in -90.0..90.0f64,
                state in 0u64..=2,
            ) {
                let entry = DataEntry::transform(
                    actor(),
                    position,
                    Rotation::new(yaw, pitch),
                    MovementState::from_raw(state).unwrap(),
                );
                let decoded = decode_entry(&encode_entry(&entry).unwrap()).unwrap();
                prop_assert_eq!(decoded, entry);
            }

            #[test]
            fn effect_round_trips(
                effect_id in any::<u32>(),
                amplifier in any::<u32>(),
                duration in any::<u32>(),
                add in any::<bool>(),
            ) {
                let entry = DataEntry::effect(actor(), effect_id, amplifier, duration, add);
                let decoded = decode_entry(&encode_entry(&entry).unwrap()).unwrap();
                prop_assert_eq!(decoded, entry);
            }
        }
    }
}

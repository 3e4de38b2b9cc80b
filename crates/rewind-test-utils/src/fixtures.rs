//! Fixture builders shared across test suites.

use rewind_core::{
    ActorId, ClientSnapshot, DamageCause, DataEntry, MovementState, RecordingStore, Rotation, Skin,
    TickId, Vec3,
};

/// A client snapshot with a small but non-trivial skin, positioned at
/// the origin.
pub fn snapshot(name: &str) -> ClientSnapshot {
    ClientSnapshot::new(
        ActorId::from(name),
        Skin {
            id: format!("skin-{name}"),
            data: vec![0xde, 0xad, 0xbe, 0xef],
            cape: Vec::new(),
            geometry_name: "geometry.humanoid".to_string(),
            geometry_data: br#"{"bones":[]}"#.to_vec(),
        },
        Vec3::zero(),
        Rotation::zero(),
        name.to_string(),
    )
}

/// A two-tick, one-client recording: a walk on tick 0, damage on
/// tick 1.
pub fn sample_store(name: &str) -> RecordingStore {
    let actor = ActorId::from(name);
    let mut store = RecordingStore::new(1);
    store.insert_tick(
        TickId(0),
        vec![DataEntry::transform(
            actor.clone(),
            Vec3::new(1.0, 64.0, 0.0),
            Rotation::new(90.0, 0.0),
            MovementState::Default,
        )],
    );
    store.insert_tick(
        TickId(1),
        vec![DataEntry::take_damage(actor, 2.0, DamageCause::Contact)],
    );
    store.push_client(snapshot(name));
    store
}

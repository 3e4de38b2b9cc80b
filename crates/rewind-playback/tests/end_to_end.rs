//! Full record → persist → decode → replay pipeline.

use rewind_core::{ActorId, DamageCause, DataEntry, MovementState, Rotation, Vec3, WorldId};
use rewind_playback::PlaybackViewer;
use rewind_record::RecordSession;
use rewind_test_utils::{snapshot, MockSink, SinkCall};

#[test]
fn recorded_session_replays_exactly() {
    let steve = ActorId::from("steve");
    let mut session =
        RecordSession::new(WorldId::from("overworld"), vec![snapshot("steve")]).unwrap();
    session.start().unwrap();

    session
        .add_entry(DataEntry::transform(
            steve.clone(),
            Vec3::new(2.0, 64.0, -1.0),
            Rotation::new(45.0, 0.0),
            MovementState::Default,
        ))
        .unwrap();
    session.capture_tick().unwrap();

    session
        .add_entry(DataEntry::take_damage(
            steve.clone(),
            2.0,
            DamageCause::Contact,
        ))
        .unwrap();
    session.capture_tick().unwrap();

    let composed = session.stop_and_save(()).unwrap().wait().unwrap();
    let store = composed.artifact.decode().unwrap();
    assert_eq!(store.ticks().len(), 2);
    assert_eq!(store.clients().len(), 1);

    let mut viewer = PlaybackViewer::new(store, |client| {
        assert_eq!(client.actor, steve);
        MockSink::new()
    })
    .unwrap();
    viewer.play();
    viewer.tick(); // step 0: the walk
    viewer.tick(); // step 1: the hit, then despawn past the end

    let calls = viewer.actor(&steve).unwrap().sink().calls();
    assert!(matches!(calls[0], SinkCall::SetMovementState(MovementState::Default)));
    assert!(matches!(calls[1], SinkCall::QueueMove { .. }));
    assert!(matches!(
        calls[2],
        SinkCall::ApplyDamage {
            damage,
            cause: DamageCause::Contact,
        } if damage == 2.0
    ));
    assert!(matches!(calls[3], SinkCall::Despawn));
    assert_eq!(calls.len(), 4);
    assert!(!viewer.is_playing());
}

#[test]
fn tampered_artifact_never_reaches_playback() {
    let mut session =
        RecordSession::new(WorldId::from("overworld"), vec![snapshot("steve")]).unwrap();
    session.start().unwrap();
    session.capture_tick().unwrap();

    let composed = session.stop_and_save(()).unwrap().wait().unwrap();
    let version = composed.artifact.version();
    let mut bytes = composed.artifact.into_bytes();
    for b in bytes.iter_mut().skip(2) {
        *b ^= 0x55;
    }
    let artifact = rewind_codec::Artifact::new(version, bytes);
    assert!(artifact.decode().is_err());
}

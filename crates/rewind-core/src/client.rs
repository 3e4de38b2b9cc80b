//! The recorded identity and starting state of one session actor.

use crate::geom::{Rotation, Vec3};
use crate::id::ActorId;

/// The four-part appearance descriptor captured for an actor.
///
/// `data`, `cape`, and `geometry_data` are raw bytes from the host
/// (image pixels, geometry JSON) and are never interpreted here. The
/// codec embeds them base64-encoded so they survive the text container
/// intact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skin {
    /// Host skin identifier.
    pub id: String,
    /// Primary skin image bytes.
    pub data: Vec<u8>,
    /// Cape image bytes (may be empty).
    pub cape: Vec<u8>,
    /// Geometry model name.
    pub geometry_name: String,
    /// Geometry definition bytes.
    pub geometry_data: Vec<u8>,
}

/// An actor's recorded identity, appearance, and starting pose.
///
/// Captured once when a session is assembled and persisted alongside
/// the entry store. At playback, one simulated actor is seeded from
/// each snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientSnapshot {
    /// Identity of the recorded actor.
    pub actor: ActorId,
    /// Appearance descriptor.
    pub skin: Skin,
    /// Position at recording start.
    pub position: Vec3,
    /// View direction at recording start.
    pub rotation: Rotation,
    /// Display-name override for the playback actor.
    pub display_name: String,
    /// Whether the actor is currently being recorded.
    ///
    /// Transient session state; never persisted, always `false` after
    /// decode.
    recording: bool,
}

impl ClientSnapshot {
    /// Construct a snapshot. The recording flag starts cleared.
    pub fn new(
        actor: ActorId,
        skin: Skin,
        position: Vec3,
        rotation: Rotation,
        display_name: String,
    ) -> Self {
        Self {
            actor,
            skin,
            position,
            rotation,
            display_name,
            recording: false,
        }
    }

    /// Whether the actor is currently being recorded.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Flip the transient recording flag.
    pub fn toggle_recording(&mut self) {
        self.recording = !self.recording;
    }

    /// Clear the transient recording flag.
    pub fn clear_recording(&mut self) {
        self.recording = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ClientSnapshot {
        ClientSnapshot::new(
            ActorId::from("steve"),
            Skin {
                id: "skin-1".to_string(),
                data: vec![0, 159, 146, 150],
                cape: Vec::new(),
                geometry_name: "geometry.humanoid".to_string(),
                geometry_data: b"{}".to_vec(),
            },
            Vec3::new(1.0, 64.0, -3.5),
            Rotation::new(90.0, 0.0),
            "Steve".to_string(),
        )
    }

    #[test]
    fn recording_flag_starts_cleared_and_toggles() {
        let mut snap = snapshot();
        assert!(!snap.is_recording());
        snap.toggle_recording();
        assert!(snap.is_recording());
        snap.toggle_recording();
        assert!(!snap.is_recording());
    }
}

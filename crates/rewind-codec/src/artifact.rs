//! Compressed recording artifacts.

use rewind_core::RecordingStore;

use crate::container::{compress, decode_store, decompress, encode_store};
use crate::error::CodecError;
use crate::FORMAT_VERSION;

/// A fully serialized recording: compressed container bytes plus the
/// format version they were written with.
///
/// The version travels alongside the bytes rather than inside them so
/// a reader can reject an artifact from a newer build without first
/// decompressing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    version: u32,
    bytes: Vec<u8>,
}

impl Artifact {
    /// Wrap previously persisted bytes with the version they were
    /// recorded under.
    pub fn new(version: u32, bytes: Vec<u8>) -> Self {
        Self { version, bytes }
    }

    /// Format version this artifact was written with.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Compressed container bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the artifact, yielding the compressed bytes for storage.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Decompress and reconstruct the recording.
    ///
    /// An artifact written by a newer build than this one is refused
    /// outright with [`CodecError::UnsupportedVersion`].
    pub fn decode(&self) -> Result<RecordingStore, CodecError> {
        if self.version > FORMAT_VERSION {
            return Err(CodecError::UnsupportedVersion {
                found: self.version,
            });
        }
        let json = decompress(&self.bytes)?;
        decode_store(&json, self.version)
    }
}

/// Serialize and compress a store into an [`Artifact`] at the current
/// format version.
pub fn compose(store: &RecordingStore) -> Result<Artifact, CodecError> {
    let json = encode_store(store)?;
    let bytes = compress(&json)?;
    Ok(Artifact::new(FORMAT_VERSION, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_core::{ActorId, DataEntry, RegainReason, TickId, Vec3};

    fn store() -> RecordingStore {
        let a = ActorId::from("steve");
        let mut store = RecordingStore::new(FORMAT_VERSION);
        store.insert_tick(
            TickId(0),
            vec![
                DataEntry::block_place(a.clone(), Vec3::new(4.0, 64.0, -2.0), 5, 0),
                DataEntry::regain_health(a, 1.0, RegainReason::Regen),
            ],
        );
        store
    }

    #[test]
    fn compose_then_decode_round_trips() {
        let store = store();
        let artifact = compose(&store).unwrap();
        assert_eq!(artifact.version(), FORMAT_VERSION);
        assert_eq!(artifact.decode().unwrap(), store);
    }

    #[test]
    fn newer_version_is_refused_before_decompression() {
        let artifact = Artifact::new(FORMAT_VERSION + 1, vec![0xde, 0xad]);
        assert!(matches!(
            artifact.decode(),
            Err(CodecError::UnsupportedVersion { found }) if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn garbage_bytes_are_corrupt() {
        let artifact = Artifact::new(FORMAT_VERSION, vec![0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(
            artifact.decode(),
            Err(CodecError::Corrupt { .. })
        ));
    }

    #[test]
    fn truncated_artifact_is_corrupt() {
        let mut bytes = compose(&store()).unwrap().into_bytes();
        bytes.truncate(bytes.len() / 2);
        let artifact = Artifact::new(FORMAT_VERSION, bytes);
        assert!(matches!(
            artifact.decode(),
            Err(CodecError::Corrupt { .. })
        ));
    }
}

//! Whole-store serialization: JSON document assembly and zlib framing.
//!
//! The document has exactly two top-level sections — the tick map and
//! the client list. Decode is fail-closed: a missing section, an
//! undecodable tick key, or any single malformed entry/client aborts
//! the whole reconstruction.

use std::io::Write;

use flate2::write::{ZlibDecoder, ZlibEncoder};
use flate2::Compression;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use rewind_core::{DataEntry, RecordingStore, TickId};

use crate::client::{decode_client, encode_client};
use crate::entry::{decode_entry, encode_entry};
use crate::error::CodecError;
use crate::tags;

/// Serialize a store to its uncompressed JSON document bytes.
pub fn encode_store(store: &RecordingStore) -> Result<Vec<u8>, CodecError> {
    let mut ticks = Map::new();
    for (tick, entries) in store.ticks() {
        let encoded: Result<Vec<Value>, CodecError> = entries.iter().map(encode_entry).collect();
        ticks.insert(tick.0.to_string(), Value::Array(encoded?));
    }

    let clients: Result<Vec<Value>, CodecError> =
        store.clients().iter().map(encode_client).collect();

    let mut doc = Map::new();
    doc.insert(tags::section::TICKS.to_string(), Value::Object(ticks));
    doc.insert(
        tags::section::CLIENTS.to_string(),
        Value::Array(clients?),
    );

    serde_json::to_vec(&Value::Object(doc)).map_err(|e| CodecError::Serialize {
        detail: e.to_string(),
    })
}

/// Reconstruct a store from uncompressed JSON document bytes.
///
/// `version` is stamped onto the returned store; it comes from the
/// artifact envelope, not the document.
pub fn decode_store(json: &[u8], version: u32) -> Result<RecordingStore, CodecError> {
    let doc: Value = serde_json::from_slice(json)
        .map_err(|e| CodecError::corrupt(format!("not a JSON document: {e}")))?;
    let doc = doc
        .as_object()
        .ok_or_else(|| CodecError::corrupt("top level is not an object"))?;

    let ticks_section = doc
        .get(tags::section::TICKS)
        .ok_or_else(|| CodecError::corrupt("missing tick section"))?
        .as_object()
        .ok_or_else(|| CodecError::corrupt("tick section is not an object"))?;
    let clients_section = doc
        .get(tags::section::CLIENTS)
        .ok_or_else(|| CodecError::corrupt("missing client section"))?
        .as_array()
        .ok_or_else(|| CodecError::corrupt("client section is not an array"))?;

    // JSON object key order is not authoritative; re-sort numerically
    // to restore the ascending-tick invariant.
    let mut decoded_ticks: Vec<(TickId, Vec<DataEntry>)> = Vec::with_capacity(ticks_section.len());
    for (key, list) in ticks_section {
        let tick = key
            .parse::<u64>()
            .map_err(|_| CodecError::malformed(format!("tick key {key:?} is not an integer")))?;
        let list = list
            .as_array()
            .ok_or_else(|| CodecError::malformed(format!("tick {tick} is not an entry list")))?;
        let entries: Result<Vec<DataEntry>, CodecError> = list.iter().map(decode_entry).collect();
        decoded_ticks.push((TickId(tick), entries?));
    }
    decoded_ticks.sort_by_key(|(tick, _)| *tick);

    let mut ticks = IndexMap::with_capacity(decoded_ticks.len());
    for (tick, entries) in decoded_ticks {
        ticks.insert(tick, entries);
    }

    let clients = clients_section
        .iter()
        .map(decode_client)
        .collect::<Result<Vec<_>, CodecError>>()?;

    Ok(RecordingStore::from_parts(ticks, clients, version))
}

/// Compress a serialized document with zlib (best compression — the
/// artifact is written once and read many times).
pub fn compress(json: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(json).map_err(|e| CodecError::Compression {
        detail: e.to_string(),
    })?;
    encoder.finish().map_err(|e| CodecError::Compression {
        detail: e.to_string(),
    })
}

/// Decompress artifact bytes back into the serialized document.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut decoder = ZlibDecoder::new(Vec::new());
    decoder
        .write_all(bytes)
        .map_err(|e| CodecError::corrupt(format!("decompression failed: {e}")))?;
    decoder
        .finish()
        .map_err(|e| CodecError::corrupt(format!("decompression failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_core::{ActorId, DamageCause, MovementState, Rotation, Vec3};

    fn store() -> RecordingStore {
        let a = ActorId::from("steve");
        let mut store = RecordingStore::new(1);
        store.insert_tick(
            TickId(0),
            vec![DataEntry::transform(
                a.clone(),
                Vec3::new(1.0, 0.0, 0.0),
                Rotation::zero(),
                MovementState::Default,
            )],
        );
        store.insert_tick(
            TickId(1),
            vec![DataEntry::take_damage(a, 2.0, DamageCause::Contact)],
        );
        store
    }

    #[test]
    fn store_round_trips_through_json() {
        let store = store();
        let json = encode_store(&store).unwrap();
        let decoded = decode_store(&json, 1).unwrap();
        assert_eq!(decoded, store);
    }

    #[test]
    fn ticks_are_sorted_numerically_not_lexically() {
        let a = ActorId::from("steve");
        let mut store = RecordingStore::new(1);
        for tick in [2u64, 10, 1] {
            store.insert_tick(
                TickId(tick),
                vec![DataEntry::block_break(a.clone(), Vec3::zero())],
            );
        }
        let json = encode_store(&store).unwrap();
        let decoded = decode_store(&json, 1).unwrap();
        let order: Vec<u64> = decoded.ticks().keys().map(|t| t.0).collect();
        assert_eq!(order, vec![1, 2, 10]);
    }

    #[test]
    fn compress_round_trips() {
        let json = encode_store(&store()).unwrap();
        let packed = compress(&json).unwrap();
        assert_eq!(decompress(&packed).unwrap(), json);
    }

    #[test]
    fn missing_client_section_is_corrupt() {
        let json = br#"{"0":{}}"#;
        assert!(matches!(
            decode_store(json, 1),
            Err(CodecError::Corrupt { .. })
        ));
    }

    #[test]
    fn missing_tick_section_is_corrupt() {
        let json = br#"{"1":[]}"#;
        assert!(matches!(
            decode_store(json, 1),
            Err(CodecError::Corrupt { .. })
        ));
    }

    #[test]
    fn one_bad_entry_fails_the_whole_decode() {
        let json = br#"{"0":{"0":[{"0":1}]},"1":[]}"#;
        assert!(matches!(
            decode_store(json, 1),
            Err(CodecError::Malformed { .. })
        ));
    }

    #[test]
    fn non_integer_tick_key_is_malformed() {
        let json = br#"{"0":{"soon":[]},"1":[]}"#;
        assert!(matches!(
            decode_store(json, 1),
            Err(CodecError::Malformed { .. })
        ));
    }
}

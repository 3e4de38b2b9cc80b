//! Tag-keyed encode/decode for [`ClientSnapshot`].
//!
//! Skin image and geometry bytes are embedded base64-encoded: the
//! container is text-oriented JSON, and a raw byte-to-text widening
//! would corrupt multi-byte sequences. The transient recording flag is
//! never written; decoded snapshots always come back with it cleared.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{Map, Value};

use rewind_core::{ActorId, ClientSnapshot, Skin};

use crate::error::CodecError;
use crate::tags;
use crate::value::{decode_rotation, decode_vec3, encode_rotation, encode_vec3, get_map, get_str};

/// Encode a client snapshot into its tag-keyed object form.
pub fn encode_client(client: &ClientSnapshot) -> Result<Value, CodecError> {
    let what = "client";
    let mut skin = Map::new();
    skin.insert(
        tags::skin::ID.to_string(),
        Value::from(client.skin.id.as_str()),
    );
    skin.insert(
        tags::skin::DATA.to_string(),
        Value::from(BASE64.encode(&client.skin.data)),
    );
    skin.insert(
        tags::skin::CAPE.to_string(),
        Value::from(BASE64.encode(&client.skin.cape)),
    );
    skin.insert(
        tags::skin::GEOMETRY_NAME.to_string(),
        Value::from(client.skin.geometry_name.as_str()),
    );
    skin.insert(
        tags::skin::GEOMETRY_DATA.to_string(),
        Value::from(BASE64.encode(&client.skin.geometry_data)),
    );

    let mut map = Map::new();
    map.insert(
        tags::client::ACTOR_ID.to_string(),
        Value::from(client.actor.as_str()),
    );
    map.insert(
        tags::client::POSITION.to_string(),
        encode_vec3(client.position, what)?,
    );
    map.insert(
        tags::client::ROTATION.to_string(),
        encode_rotation(client.rotation, what)?,
    );
    map.insert(tags::client::SKIN.to_string(), Value::Object(skin));
    map.insert(
        tags::client::DISPLAY_NAME.to_string(),
        Value::from(client.display_name.as_str()),
    );
    Ok(Value::Object(map))
}

/// Decode a tag-keyed object back into a client snapshot.
///
/// Every tag is required, including all five skin parts; invalid
/// base64 in a byte field is `Malformed`.
pub fn decode_client(value: &Value) -> Result<ClientSnapshot, CodecError> {
    let what = "client";
    let map = value
        .as_object()
        .ok_or_else(|| CodecError::malformed("client is not an object"))?;

    let actor = ActorId::from(get_str(map, tags::client::ACTOR_ID, what)?);
    let position = decode_vec3(get_map(map, tags::client::POSITION, what)?, what)?;
    let rotation = decode_rotation(get_map(map, tags::client::ROTATION, what)?, what)?;
    let display_name = get_str(map, tags::client::DISPLAY_NAME, what)?.to_string();

    let skin_map = get_map(map, tags::client::SKIN, what)?;
    let skin = Skin {
        id: get_str(skin_map, tags::skin::ID, "client skin")?.to_string(),
        data: decode_b64(skin_map, tags::skin::DATA)?,
        cape: decode_b64(skin_map, tags::skin::CAPE)?,
        geometry_name: get_str(skin_map, tags::skin::GEOMETRY_NAME, "client skin")?.to_string(),
        geometry_data: decode_b64(skin_map, tags::skin::GEOMETRY_DATA)?,
    };

    Ok(ClientSnapshot::new(
        actor,
        skin,
        position,
        rotation,
        display_name,
    ))
}

fn decode_b64(map: &Map<String, Value>, tag: &str) -> Result<Vec<u8>, CodecError> {
    let text = get_str(map, tag, "client skin")?;
    BASE64
        .decode(text)
        .map_err(|e| CodecError::malformed(format!("client skin: tag {tag} bad base64: {e}")))
}

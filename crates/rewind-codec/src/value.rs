//! Typed accessors over `serde_json` maps.
//!
//! Every accessor validates presence and type, producing a
//! `Malformed` error naming the tag and context. Missing keys are
//! never defaulted.

use serde_json::{Map, Value};

use rewind_core::{Rotation, Vec3};

use crate::error::CodecError;
use crate::tags;

pub(crate) fn require<'a>(
    map: &'a Map<String, Value>,
    tag: &str,
    what: &str,
) -> Result<&'a Value, CodecError> {
    map.get(tag)
        .ok_or_else(|| CodecError::malformed(format!("{what}: missing tag {tag}")))
}

pub(crate) fn get_u64(map: &Map<String, Value>, tag: &str, what: &str) -> Result<u64, CodecError> {
    require(map, tag, what)?
        .as_u64()
        .ok_or_else(|| CodecError::malformed(format!("{what}: tag {tag} is not an unsigned int")))
}

pub(crate) fn get_u32(map: &Map<String, Value>, tag: &str, what: &str) -> Result<u32, CodecError> {
    let v = get_u64(map, tag, what)?;
    u32::try_from(v)
        .map_err(|_| CodecError::malformed(format!("{what}: tag {tag} value {v} exceeds u32")))
}

pub(crate) fn get_f64(map: &Map<String, Value>, tag: &str, what: &str) -> Result<f64, CodecError> {
    require(map, tag, what)?
        .as_f64()
        .ok_or_else(|| CodecError::malformed(format!("{what}: tag {tag} is not a number")))
}

pub(crate) fn get_bool(
    map: &Map<String, Value>,
    tag: &str,
    what: &str,
) -> Result<bool, CodecError> {
    require(map, tag, what)?
        .as_bool()
        .ok_or_else(|| CodecError::malformed(format!("{what}: tag {tag} is not a bool")))
}

pub(crate) fn get_str<'a>(
    map: &'a Map<String, Value>,
    tag: &str,
    what: &str,
) -> Result<&'a str, CodecError> {
    require(map, tag, what)?
        .as_str()
        .ok_or_else(|| CodecError::malformed(format!("{what}: tag {tag} is not a string")))
}

pub(crate) fn get_map<'a>(
    map: &'a Map<String, Value>,
    tag: &str,
    what: &str,
) -> Result<&'a Map<String, Value>, CodecError> {
    require(map, tag, what)?
        .as_object()
        .ok_or_else(|| CodecError::malformed(format!("{what}: tag {tag} is not an object")))
}

/// A finite `f64` as a JSON number. NaN and infinity have no JSON
/// representation and abort serialization.
pub(crate) fn num_f64(v: f64, what: &str) -> Result<Value, CodecError> {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .ok_or_else(|| CodecError::Serialize {
            detail: format!("{what}: non-finite float {v}"),
        })
}

pub(crate) fn encode_vec3(v: Vec3, what: &str) -> Result<Value, CodecError> {
    let mut map = Map::new();
    map.insert(tags::position::X.to_string(), num_f64(v.x, what)?);
    map.insert(tags::position::Y.to_string(), num_f64(v.y, what)?);
    map.insert(tags::position::Z.to_string(), num_f64(v.z, what)?);
    Ok(Value::Object(map))
}

pub(crate) fn decode_vec3(map: &Map<String, Value>, what: &str) -> Result<Vec3, CodecError> {
    Ok(Vec3::new(
        get_f64(map, tags::position::X, what)?,
        get_f64(map, tags::position::Y, what)?,
        get_f64(map, tags::position::Z, what)?,
    ))
}

pub(crate) fn encode_rotation(r: Rotation, what: &str) -> Result<Value, CodecError> {
    let mut map = Map::new();
    map.insert(tags::rotation::YAW.to_string(), num_f64(r.yaw, what)?);
    map.insert(tags::rotation::PITCH.to_string(), num_f64(r.pitch, what)?);
    Ok(Value::Object(map))
}

pub(crate) fn decode_rotation(map: &Map<String, Value>, what: &str) -> Result<Rotation, CodecError> {
    Ok(Rotation::new(
        get_f64(map, tags::rotation::YAW, what)?,
        get_f64(map, tags::rotation::PITCH, what)?,
    ))
}

//! Wire payload normalization.
//!
//! The archive may send any field as `snake_case` (`img_src`) or compact camel
//! (`imgSrc`), and mixes both within one payload. Normalization is a single
//! merge applied recursively to every object: the camel value wins when it is
//! present and non-null, otherwise the underscore value is moved to the camel
//! key. The merged tree is then decoded into the typed records of
//! [`crate::domain::model`].

use crate::domain::model::{Manifest, Photo};
use crate::utils::error::{MarsPhotosError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const PHOTOS_KEY: &str = "photos";
pub const LATEST_PHOTOS_KEY: &str = "latestPhotos";
pub const MANIFEST_KEY: &str = "photoManifest";

/// `img_src` -> `imgSrc`. Keys without underscores are returned unchanged.
pub fn compact_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for segment in key.split('_').filter(|segment| !segment.is_empty()) {
        if out.is_empty() {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Rewrites every object key in `value` to its compact camel form.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(merge_object(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

fn merge_object(map: Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::new();
    let mut fallbacks = Vec::new();

    for (key, value) in map {
        let value = normalize_keys(value);
        if key.contains('_') {
            fallbacks.push((compact_key(&key), value));
        } else {
            merged.insert(key, value);
        }
    }

    for (key, value) in fallbacks {
        let camel_present = merged.get(&key).is_some_and(|existing| !existing.is_null());
        if !camel_present {
            merged.insert(key, value);
        }
    }

    merged
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| MarsPhotosError::parse(format!("unexpected {} shape: {}", what, e)))
}

/// Normalizes `payload` and takes the value under the canonical `key`.
fn unwrap_key(payload: Value, key: &str) -> Result<Value> {
    match normalize_keys(payload) {
        Value::Object(mut map) => map
            .remove(key)
            .ok_or_else(|| MarsPhotosError::parse(format!("response is missing `{}`", key))),
        other => Err(MarsPhotosError::parse(format!(
            "expected a JSON object, got {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn normalize_photo(value: Value) -> Result<Photo> {
    decode(normalize_keys(value), "photo")
}

/// Decodes a `{"photos": [...]}` response.
pub fn normalize_photos(payload: Value) -> Result<Vec<Photo>> {
    decode(unwrap_key(payload, PHOTOS_KEY)?, "photo list")
}

/// Decodes a `{"latest_photos": [...]}` response.
pub fn normalize_latest_photos(payload: Value) -> Result<Vec<Photo>> {
    decode(unwrap_key(payload, LATEST_PHOTOS_KEY)?, "latest photo list")
}

/// Decodes a `{"photo_manifest": {...}}` response.
pub fn normalize_manifest(payload: Value) -> Result<Manifest> {
    decode(unwrap_key(payload, MANIFEST_KEY)?, "manifest")
}

//! Outbound field-dropping rule.
//!
//! A key is left out of a request body or query string when its value is null
//! or an empty string. Every other value is sent, including `false` and `0`:
//! the API reads a missing key as "use the default" and a present one as an
//! explicit choice.
//!
//! Only top-level keys are compacted. Nested objects (discount, split, ...)
//! already omit their own absent fields when serialized.

use crate::error::AsaasError;

use serde::Serialize;
use serde_json::{Map, Value};

/// Whether a value is the "not provided" marker.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Drop null and empty-string entries from a top-level object.
pub fn compact(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(compact_map(map)),
        other => other,
    }
}

pub fn compact_map(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(_, value)| !is_empty_value(value))
        .collect()
}

/// Serialize a request type into a compacted JSON body.
#[track_caller]
pub fn to_body<T: Serialize + ?Sized>(request: &T) -> Result<Value, AsaasError> {
    let value = serde_json::to_value(request)?;
    Ok(compact(value))
}

/// Serialize a filter type into query pairs.
///
/// Scalars are rendered the way the API expects them in a query string:
/// strings verbatim, numbers and booleans via their JSON text.
#[track_caller]
pub fn to_query<T: Serialize + ?Sized>(filter: &T) -> Result<Vec<(String, String)>, AsaasError> {
    match to_body(filter)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, rendered)
            })
            .collect()),
        Value::Null => Ok(Vec::new()),
        other => Err(AsaasError::decode(format!(
            "Query filters must serialize to an object, got {other}"
        ))),
    }
}

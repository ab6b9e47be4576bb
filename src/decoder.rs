// Decode status/json bytes into the typed model.
//
// Unknown fields are ignored and missing fields default (every model struct is
// #[serde(default)]). A null member counts as missing. The top level must be a
// JSON object.

use serde::de::{Error as _, Unexpected};
use serde_json::{Map, Value};

use crate::error::StatusError;
use crate::models::StatusSnapshot;

/// Decode a status document read at `read_version`.
pub fn decode(raw: &[u8], read_version: i64) -> Result<StatusSnapshot, StatusError> {
    let mut doc: Value = serde_json::from_slice(raw).map_err(StatusError::Decode)?;
    if !doc.is_object() {
        return Err(StatusError::Decode(serde_json::Error::invalid_type(
            unexpected(&doc),
            &"a status object",
        )));
    }
    drop_nulls(&mut doc, false);

    let mut status: StatusSnapshot = serde_json::from_value(doc).map_err(StatusError::Decode)?;
    for (key, machine) in status.cluster.machines.iter_mut() {
        if machine.id.is_empty() {
            machine.id.clone_from(key);
        }
    }
    status.read_version = read_version;
    Ok(status)
}

/// Arrays kept verbatim, null elements included.
const OPAQUE_FIELDS: &[&str] = &["messages", "incompatible_connections"];
/// Objects whose members are map entries rather than struct fields.
const KEYED_FIELDS: &[&str] = &["processes", "machines", "instances", "tags"];

/// Null struct fields are removed so they default; null map values and null
/// array elements become `{}` so the entry keeps its zero value.
fn drop_nulls(v: &mut Value, keyed: bool) {
    let Value::Object(map) = v else {
        return;
    };
    if keyed {
        for entry in map.values_mut() {
            if entry.is_null() {
                *entry = Value::Object(Map::new());
            }
            drop_nulls(entry, false);
        }
        return;
    }

    map.retain(|_, field| !field.is_null());
    for (key, field) in map.iter_mut() {
        let key = key.as_str();
        if OPAQUE_FIELDS.contains(&key) {
            continue;
        }
        match field {
            Value::Array(items) => {
                for item in items.iter_mut() {
                    if item.is_null() {
                        *item = Value::Object(Map::new());
                    }
                    drop_nulls(item, false);
                }
            }
            _ => drop_nulls(field, KEYED_FIELDS.contains(&key)),
        }
    }
}

fn unexpected(v: &Value) -> Unexpected<'_> {
    match v {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Unexpected::Float(f),
            None => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

//! BSON → plain JSON.
//!
//! Results leave the service as ordinary JSON: object ids become their hex
//! string and dates become RFC 3339 strings instead of `{"$oid": ...}` /
//! `{"$date": ...}` wrappers. Anything without a natural JSON form keeps its
//! relaxed extended-JSON shape.

use mongodb::bson::{Bson, Document};
use serde_json::{Map, Number, Value};

/// Convert one BSON value.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            // outside the RFC 3339 year range
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::String(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(i) => Value::from(i),
        Bson::Int64(i) => Value::from(i),
        Bson::Double(f) => match Number::from_f64(f) {
            Some(n) => Value::Number(n),
            None => Bson::Double(f).into_relaxed_extjson(),
        },
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Document(doc) => document_to_json(doc),
        other => other.into_relaxed_extjson(),
    }
}

/// Convert a whole document, keeping field order.
pub fn document_to_json(doc: Document) -> Value {
    let map: Map<String, Value> = doc
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();
    Value::Object(map)
}

//! Recursive JSON key-casing rewrite.
//!
//! The channel API sends control messages with snake_case keys; the typed
//! event structs deserialize camelCase. The rewrite walks the decoded JSON
//! tree and renames every mapping key, leaving scalar values untouched.

use serde_json::{Map, Value};

/// Rewrites every mapping key in `value` from snake_case to camelCase,
/// recursing through arrays and nested objects.
pub fn camel_case_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(camel_case_keys).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camel_case(&key), camel_case_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        scalar => scalar,
    }
}

/// Converts a snake_case identifier to camelCase.
fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

//! Order-insensitive query hash (FNV-1a 32-bit), used to label and cache
//! results of identical queries.

use netsearch_model::NetworkSearchQuery;
use serde_json::Value;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Keys that do not change the search outcome.
const IGNORED_KEYS: &[&str] = &["format"];

/// Hash a query. Lists are compared as multisets and object keys are
/// sorted, so queries differing only in list order hash equally.
pub fn query_hash(query: &NetworkSearchQuery) -> u32 {
    let value = match serde_json::to_value(query) {
        Ok(Value::Object(mut map)) => {
            for key in IGNORED_KEYS {
                map.remove(*key);
            }
            Value::Object(map)
        }
        Ok(other) => other,
        Err(_) => Value::Null,
    };
    fnv1a_32(canonical_string(&value).as_bytes())
}

/// String unique to a JSON value's contents, independent of list order.
fn canonical_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let mut parts: Vec<String> = items.iter().map(canonical_string).collect();
            parts.sort();
            format!("[{}]", parts.join(","))
        }
        Value::Object(map) => {
            let mut parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}{}", k, canonical_string(v)))
                .collect();
            parts.sort();
            format!("{{{}}}", parts.join(","))
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
    }
}

fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for b in bytes {
        hash ^= u32::from(*b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

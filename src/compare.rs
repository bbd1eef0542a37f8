//! Structural equality over parsed JSON values.
//!
//! This module implements the comparison semantics shared by the
//! [`json`](crate::json) and [`ndjson`](crate::ndjson) comparators: two
//! values are equal when their types match recursively, mappings carry the
//! same key set with pairwise-equal values (key order irrelevant), and
//! sequences have the same length with element-wise equal values in order.
//!
//! Numbers are compared numerically rather than by representation, so `1`
//! and `1.0` are equal: Kibana decodes numbers to doubles before
//! re-serializing, and the integer/float distinction does not survive a
//! round-trip through the server.

use serde_json::{Map, Number, Value};

/// Compare two JSON values structurally.
///
/// Key order in objects is irrelevant; element order in arrays is not.
/// Numbers compare numerically across integer and float representations.
///
/// # Example
///
/// ```
/// use kibana_diff_suppress::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
/// assert!(deep_equal(&json!(1), &json!(1.0)));
/// assert!(!deep_equal(&json!(1), &json!("1")));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(ea, eb)| deep_equal(ea, eb))
        },
        (Value::Object(x), Value::Object(y)) => objects_equal(x, y),
        _ => false,
    }
}

/// Compare two JSON objects structurally (same key set, pairwise-equal values).
pub(crate) fn objects_equal(a: &Map<String, Value>, b: &Map<String, Value>) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, va)| b.get(key).is_some_and(|vb| deep_equal(va, vb)))
}

// Exact integer comparison where both sides are integers; f64 otherwise.
// Integers beyond 2^53 lose precision in the float path, which matches the
// behavior of Kibana's own JSON decoding.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

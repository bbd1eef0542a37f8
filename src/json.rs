//! JSON equivalence comparator.
//!
//! Decides whether two textual JSON payloads describe the same value, so
//! that formatting, whitespace, and key-order churn between what was stored
//! and what the server returns does not show up as a configuration diff.
//!
//! # Example
//!
//! ```
//! use kibana_diff_suppress::json;
//!
//! assert!(json::equivalent(r#"{"a":1,"b":2}"#, r#"{ "b": 2, "a": 1 }"#));
//! assert!(!json::equivalent("1", "\"1\""));
//! assert!(!json::equivalent("{bad json", "{}"));
//! ```

use serde_json::Value;
use tracing::debug;

use crate::compare::deep_equal;
use crate::error::EquivalenceError;

/// Report whether two JSON payloads are semantically equivalent.
///
/// A payload that fails to parse is never equivalent to anything: malformed
/// state must surface as a diff rather than be silently accepted. Use
/// [`check`] to distinguish a parse failure from a genuine difference.
pub fn equivalent(old: &str, new: &str) -> bool {
    match check(old, new) {
        Ok(eq) => eq,
        Err(error) => {
            debug!(%error, "payload is not valid JSON, keeping the diff");
            false
        },
    }
}

/// Compare two JSON payloads, surfacing parse failures.
///
/// Returns `Ok(true)` when both payloads parse and are structurally equal,
/// `Ok(false)` when both parse but differ, and `Err` when either fails to
/// parse. [`equivalent`] is `check(..).unwrap_or(false)`.
pub fn check(old: &str, new: &str) -> Result<bool, EquivalenceError> {
    let old_value: Value = serde_json::from_str(old)?;
    let new_value: Value = serde_json::from_str(new)?;
    Ok(deep_equal(&old_value, &new_value))
}

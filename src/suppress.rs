//! Diff-suppression predicate registry.
//!
//! Resource reconciliation layers call an equivalence predicate before
//! presenting a change to the user: when the predicate reports the stored
//! and proposed text as equivalent, the change is suppressed and no update
//! is issued. [`Suppressions`] wires attribute names to predicates once, at
//! construction time, and is immutable afterwards.
//!
//! # Example
//!
//! ```
//! use kibana_diff_suppress::Suppressions;
//!
//! let suppressions = Suppressions::new()
//!     .with_json("pipeline")
//!     .with_ndjson("data");
//!
//! // Reformatted JSON is not a change
//! assert!(suppressions.suppresses("pipeline", r#"{"a":1}"#, r#"{ "a": 1 }"#));
//! // Unregistered attributes always show their diff
//! assert!(!suppressions.suppresses("name", "x", "x"));
//! ```

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::{json, ndjson};

type Predicate = Box<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Registry of per-attribute diff-suppression predicates.
///
/// Built once with the `with_*` methods and then consulted through
/// [`suppresses`](Suppressions::suppresses). Attributes without a registered
/// predicate are never suppressed.
#[derive(Default)]
pub struct Suppressions {
    checks: HashMap<String, Predicate>,
}

impl Suppressions {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the JSON equivalence comparator for an attribute.
    pub fn with_json(self, attribute: impl Into<String>) -> Self {
        self.with_predicate(attribute, json::equivalent)
    }

    /// Register the default NDJSON equivalence comparator for an attribute.
    pub fn with_ndjson(self, attribute: impl Into<String>) -> Self {
        self.with_predicate(attribute, ndjson::equivalent)
    }

    /// Register a custom NDJSON comparator for an attribute.
    pub fn with_comparator(
        self,
        attribute: impl Into<String>,
        comparator: ndjson::Comparator,
    ) -> Self {
        self.with_predicate(attribute, move |old, new| comparator.equivalent(old, new))
    }

    /// Register an arbitrary equivalence predicate for an attribute.
    ///
    /// The predicate receives the attribute's stored and proposed text and
    /// returns `true` to treat them as unchanged.
    pub fn with_predicate(
        mut self,
        attribute: impl Into<String>,
        predicate: impl Fn(&str, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.checks.insert(attribute.into(), Box::new(predicate));
        self
    }

    /// Decide whether a change to `attribute` should be treated as unchanged.
    ///
    /// Returns `false` for attributes without a registered predicate, so an
    /// unknown attribute always shows its diff.
    pub fn suppresses(&self, attribute: &str, old: &str, new: &str) -> bool {
        let Some(predicate) = self.checks.get(attribute) else {
            return false;
        };
        let suppressed = predicate(old, new);
        if suppressed {
            debug!(attribute, "values are equivalent, suppressing the diff");
        }
        suppressed
    }

    /// Report whether a predicate is registered for `attribute`.
    pub fn is_registered(&self, attribute: &str) -> bool {
        self.checks.contains_key(attribute)
    }

    /// The attributes with a registered predicate, in arbitrary order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> + '_ {
        self.checks.keys().map(String::as_str)
    }
}

impl fmt::Debug for Suppressions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attributes: Vec<&str> = self.attributes().collect();
        attributes.sort_unstable();
        f.debug_struct("Suppressions")
            .field("attributes", &attributes)
            .finish()
    }
}

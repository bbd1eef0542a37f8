//! NDJSON equivalence comparator.
//!
//! Kibana's saved-object export/import endpoints speak NDJSON: one JSON
//! object per line. On every write the server rewrites the `version` and
//! `updated_at` fields of each object and may return the objects in a
//! different order, so a byte comparison of the stored and returned payloads
//! diffs on every refresh. This comparator strips the server-managed fields
//! and matches records by their `id` instead of their position.
//!
//! # Example
//!
//! ```
//! use kibana_diff_suppress::ndjson;
//!
//! let old = "{\"id\":\"a\",\"version\":1,\"v\":5}\n{\"id\":\"b\",\"v\":6}";
//! let new = "{\"id\":\"b\",\"v\":6}\n{\"id\":\"a\",\"version\":2,\"v\":5}";
//! assert!(ndjson::equivalent(old, new));
//! ```

use serde_json::{Map, Value};
use tracing::debug;

use crate::compare::objects_equal;
use crate::error::EquivalenceError;

/// Fields stripped from every record before comparison.
///
/// Both are rewritten by the server on every write and carry no
/// configuration meaning.
pub const DEFAULT_IGNORED_FIELDS: [&str; 2] = ["version", "updated_at"];

/// An NDJSON equivalence comparator with a configurable ignored-field set.
///
/// The default comparator, used by the module-level [`equivalent`] and
/// [`check`] functions, ignores [`DEFAULT_IGNORED_FIELDS`]. Build a custom
/// one when an API manages additional fields:
///
/// ```
/// use kibana_diff_suppress::ndjson::Comparator;
///
/// let comparator = Comparator::new().with_ignored_field("migrationVersion");
/// assert!(comparator.equivalent(
///     "{\"id\":\"a\",\"migrationVersion\":\"7.0.0\"}",
///     "{\"id\":\"a\",\"migrationVersion\":\"7.1.0\"}",
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct Comparator {
    ignored_fields: Vec<String>,
}

impl Comparator {
    /// Create a comparator ignoring [`DEFAULT_IGNORED_FIELDS`].
    pub fn new() -> Self {
        Self {
            ignored_fields: DEFAULT_IGNORED_FIELDS
                .iter()
                .map(|f| (*f).to_string())
                .collect(),
        }
    }

    /// Add a field to strip from every record before comparison.
    ///
    /// The `id` field is the record matching key and must not be ignored.
    pub fn with_ignored_field(mut self, field: impl Into<String>) -> Self {
        self.ignored_fields.push(field.into());
        self
    }

    /// The fields stripped from every record before comparison.
    pub fn ignored_fields(&self) -> &[String] {
        &self.ignored_fields
    }

    /// Report whether two NDJSON documents are semantically equivalent.
    ///
    /// Any parse failure, missing `id`, or non-string `id` makes the
    /// documents non-equivalent so that the diff is surfaced. Use [`check`]
    /// to distinguish those failures from a genuine difference.
    ///
    /// [`check`]: Comparator::check
    pub fn equivalent(&self, old: &str, new: &str) -> bool {
        match self.check(old, new) {
            Ok(eq) => eq,
            Err(error) => {
                debug!(%error, "payload is not valid NDJSON, keeping the diff");
                false
            },
        }
    }

    /// Compare two NDJSON documents, surfacing parse failures.
    ///
    /// The documents are equivalent when they have the same line count and
    /// every old record has a counterpart in the new document with the same
    /// string `id` and structurally equal content after the ignored fields
    /// are stripped. Record order is irrelevant. When a document contains
    /// several records sharing an `id`, the first one in line order is the
    /// one matched against.
    ///
    /// Returns `Err` when any line fails to parse as a JSON object or any
    /// record lacks a string `id`; both documents are validated before
    /// matching starts, so the outcome never depends on match order.
    pub fn check(&self, old: &str, new: &str) -> Result<bool, EquivalenceError> {
        let old_lines: Vec<&str> = old.split('\n').collect();
        let new_lines: Vec<&str> = new.split('\n').collect();
        if old_lines.len() != new_lines.len() {
            debug!(
                old_lines = old_lines.len(),
                new_lines = new_lines.len(),
                "line count changed, keeping the diff"
            );
            return Ok(false);
        }

        let old_records = self.parse_records(&old_lines)?;
        let new_records = self.parse_records(&new_lines)?;

        for (id, record) in &old_records {
            match new_records.iter().find(|(new_id, _)| new_id == id) {
                Some((_, counterpart)) => {
                    if !objects_equal(record, counterpart) {
                        debug!(id = %id, "record content changed, keeping the diff");
                        return Ok(false);
                    }
                },
                None => {
                    debug!(id = %id, "record disappeared, keeping the diff");
                    return Ok(false);
                },
            }
        }

        Ok(true)
    }

    // Parse every line into an (id, filtered record) pair, preserving line
    // order. Ignored fields are stripped before the id is extracted, so the
    // comparison downstream sees only configuration-bearing fields.
    fn parse_records(
        &self,
        lines: &[&str],
    ) -> Result<Vec<(String, Map<String, Value>)>, EquivalenceError> {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let line_number = index + 1;
                let mut record: Map<String, Value> = serde_json::from_str(line).map_err(
                    |source| EquivalenceError::InvalidLine {
                        line: line_number,
                        source,
                    },
                )?;
                for field in &self.ignored_fields {
                    record.remove(field.as_str());
                }
                let id = match record.get("id") {
                    Some(Value::String(id)) => id.clone(),
                    Some(_) => {
                        return Err(EquivalenceError::NonStringId { line: line_number })
                    },
                    None => return Err(EquivalenceError::MissingId { line: line_number }),
                };
                Ok((id, record))
            })
            .collect()
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

/// Report whether two NDJSON documents are semantically equivalent, ignoring
/// [`DEFAULT_IGNORED_FIELDS`].
///
/// See [`Comparator::equivalent`] for the full semantics.
pub fn equivalent(old: &str, new: &str) -> bool {
    Comparator::new().equivalent(old, new)
}

/// Compare two NDJSON documents with [`DEFAULT_IGNORED_FIELDS`], surfacing
/// parse failures.
///
/// See [`Comparator::check`] for the full semantics.
pub fn check(old: &str, new: &str) -> Result<bool, EquivalenceError> {
    Comparator::new().check(old, new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_fields_do_not_diff() {
        let old = r#"{"id":"x","version":1,"updated_at":"t1","v":5}"#;
        let new = r#"{"id":"x","version":2,"updated_at":"t2","v":5}"#;
        assert!(equivalent(old, new));
    }

    #[test]
    fn test_content_change_diffs() {
        let old = r#"{"id":"x","version":1,"updated_at":"t1","v":5}"#;
        let new = r#"{"id":"x","version":2,"updated_at":"t2","v":6}"#;
        assert!(!equivalent(old, new));
    }

    #[test]
    fn test_line_count_mismatch() {
        let old = "{\"id\":\"a\",\"v\":1}\n{\"id\":\"b\",\"v\":2}";
        let new = "{\"id\":\"a\",\"v\":1}";
        assert!(!equivalent(old, new));
        // A count mismatch is a verdict, not a parse failure
        assert!(!check(old, new).unwrap());
    }

    #[test]
    fn test_reordering_is_tolerated() {
        let old = "{\"id\":\"a\",\"v\":1}\n{\"id\":\"b\",\"v\":2}";
        let new = "{\"id\":\"b\",\"v\":2}\n{\"id\":\"a\",\"v\":1}";
        assert!(equivalent(old, new));
    }

    #[test]
    fn test_missing_counterpart_diffs() {
        let old = "{\"id\":\"a\",\"v\":1}\n{\"id\":\"b\",\"v\":2}";
        let new = "{\"id\":\"a\",\"v\":1}\n{\"id\":\"c\",\"v\":2}";
        assert!(!equivalent(old, new));
    }

    #[test]
    fn test_malformed_line() {
        let old = "{\"id\":\"a\",\"v\":1}\n{not json";
        let new = "{\"id\":\"a\",\"v\":1}\n{\"id\":\"b\",\"v\":2}";
        assert!(!equivalent(old, new));
        assert!(matches!(
            check(old, new),
            Err(EquivalenceError::InvalidLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_line_must_be_an_object() {
        assert!(!equivalent("[1,2,3]", "[1,2,3]"));
        assert!(!equivalent("", ""));
        assert!(matches!(
            check("", ""),
            Err(EquivalenceError::InvalidLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_missing_id_fails_closed() {
        let old = r#"{"v":1}"#;
        let new = r#"{"v":1}"#;
        assert!(!equivalent(old, new));
        assert!(matches!(
            check(old, new),
            Err(EquivalenceError::MissingId { line: 1 })
        ));
    }

    #[test]
    fn test_non_string_id_fails_closed() {
        let old = r#"{"id":7,"v":1}"#;
        let new = r#"{"id":7,"v":1}"#;
        assert!(!equivalent(old, new));
        assert!(matches!(
            check(old, new),
            Err(EquivalenceError::NonStringId { line: 1 })
        ));
    }

    #[test]
    fn test_new_document_records_are_validated_too() {
        let old = r#"{"id":"a","v":1}"#;
        let new = r#"{"v":1}"#;
        assert!(matches!(
            check(old, new),
            Err(EquivalenceError::MissingId { line: 1 })
        ));
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        // Both "a" records in old match the first "a" record in new; the
        // second new record never participates.
        let old = "{\"id\":\"a\",\"v\":1}\n{\"id\":\"a\",\"v\":1}";
        let new = "{\"id\":\"a\",\"v\":1}\n{\"id\":\"a\",\"v\":2}";
        assert!(equivalent(old, new));

        let new_changed_first = "{\"id\":\"a\",\"v\":2}\n{\"id\":\"a\",\"v\":1}";
        assert!(!equivalent(old, new_changed_first));
    }

    #[test]
    fn test_trailing_newline_counts_as_a_line() {
        let old = "{\"id\":\"a\",\"v\":1}\n";
        let new = "{\"id\":\"a\",\"v\":1}";
        assert!(!equivalent(old, new));
    }

    #[test]
    fn test_nested_values_compare_structurally() {
        let old = r#"{"id":"a","attributes":{"title":"t","fields":[1,2]},"version":1}"#;
        let new = r#"{"id":"a","version":9,"attributes":{"fields":[1,2],"title":"t"}}"#;
        assert!(equivalent(old, new));

        let changed = r#"{"id":"a","attributes":{"title":"t","fields":[2,1]},"version":1}"#;
        assert!(!equivalent(old, changed));
    }

    #[test]
    fn test_custom_ignored_field() {
        let comparator = Comparator::new().with_ignored_field("migrationVersion");
        let old = r#"{"id":"a","migrationVersion":"7.0.0","v":1}"#;
        let new = r#"{"id":"a","migrationVersion":"7.1.0","v":1}"#;
        assert!(comparator.equivalent(old, new));
        // The default comparator still sees the field
        assert!(!equivalent(old, new));
    }

    #[test]
    fn test_defaults_exposed() {
        let comparator = Comparator::default();
        assert_eq!(comparator.ignored_fields(), &["version", "updated_at"]);
    }
}

//! Error types for the equivalence comparators.

use thiserror::Error;

/// Errors surfaced by the checked comparator APIs.
///
/// The boolean predicates ([`json::equivalent`](crate::json::equivalent),
/// [`ndjson::equivalent`](crate::ndjson::equivalent)) never return these:
/// every failure below degrades to a "not equivalent" verdict there, so that
/// malformed state always surfaces as a diff. The `check` variants expose the
/// failure for callers that want diagnostics.
#[derive(Debug, Error)]
pub enum EquivalenceError {
    /// A payload could not be parsed as JSON.
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// An NDJSON line could not be parsed as a JSON object.
    #[error("invalid JSON object on line {line}: {source}")]
    InvalidLine {
        /// 1-based line number within the document.
        line: usize,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// An NDJSON record has no `id` field.
    #[error("record on line {line} has no 'id' field")]
    MissingId {
        /// 1-based line number within the document.
        line: usize,
    },

    /// An NDJSON record's `id` field is not a string.
    #[error("record on line {line} has a non-string 'id' field")]
    NonStringId {
        /// 1-based line number within the document.
        line: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EquivalenceError::MissingId { line: 3 };
        assert_eq!(format!("{}", err), "record on line 3 has no 'id' field");

        let err = EquivalenceError::NonStringId { line: 1 };
        assert_eq!(
            format!("{}", err),
            "record on line 1 has a non-string 'id' field"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err: EquivalenceError = source.into();
        assert!(matches!(err, EquivalenceError::InvalidJson(_)));
        assert!(format!("{}", err).starts_with("invalid JSON payload:"));
    }
}

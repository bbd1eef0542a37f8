//! Semantic equivalence checks for Kibana provider configuration.
//!
//! Declarative provider attributes that carry JSON or NDJSON text (saved
//! objects, logstash pipelines, exported object bundles) diff on every
//! refresh if compared byte-for-byte: the server reformats payloads,
//! reorders object keys, rewrites `version`/`updated_at` metadata, and
//! returns exported records in arbitrary order. This crate decides whether
//! two such text values are *semantically* the same, so the reconciliation
//! layer can suppress spurious diffs instead of issuing no-op updates.
//!
//! # Overview
//!
//! - [`json`]: parses both payloads and compares the value trees
//!   structurally, ignoring formatting and key order.
//! - [`ndjson`]: compares newline-delimited JSON documents as id-keyed
//!   record sets, stripping server-managed fields first.
//! - [`Suppressions`]: wires comparators to attribute names as
//!   diff-suppression predicates for the reconciliation layer.
//! - [`EquivalenceError`]: the detail channel behind the boolean
//!   predicates, for callers that need to tell "different" from "malformed".
//!
//! Every comparator is a pure function over its inputs: no I/O, no shared
//! state, safe to call concurrently from any thread. Malformed input is
//! never equivalent to anything; the boolean predicates fold all failures
//! into `false` so that a bad payload always surfaces as a diff.
//!
//! # Quick Start
//!
//! ```
//! use kibana_diff_suppress::{json, ndjson, Suppressions};
//!
//! // Formatting and key order are not changes
//! assert!(json::equivalent(r#"{"a":1,"b":2}"#, r#"{ "b": 2, "a": 1 }"#));
//!
//! // Server-managed fields and record order are not changes
//! assert!(ndjson::equivalent(
//!     "{\"id\":\"a\",\"version\":1,\"title\":\"t\"}\n{\"id\":\"b\",\"title\":\"u\"}",
//!     "{\"id\":\"b\",\"title\":\"u\"}\n{\"id\":\"a\",\"version\":2,\"title\":\"t\"}",
//! ));
//!
//! // Attach comparators to the attributes that need them
//! let suppressions = Suppressions::new()
//!     .with_json("pipeline")
//!     .with_ndjson("data");
//! assert!(suppressions.suppresses("pipeline", "{}", "{ }"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod error;
pub mod json;
pub mod logging;
pub mod ndjson;
pub mod suppress;

// Re-export main types at crate root
pub use compare::deep_equal;
pub use error::EquivalenceError;
pub use logging::{init_logging, try_init_logging};
pub use suppress::Suppressions;

// Re-export commonly used external types
pub use serde_json;

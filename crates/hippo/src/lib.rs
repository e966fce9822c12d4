//! Typed value extraction for Rust
//!
//! This crate bundles the extraction engine:
//! - Total coercion of raw text into typed values
//! - Delimited lists
//! - Case-insensitive dotted-path lookup over JSON documents
//! - Date and date-time values bound to a process-wide timezone
//! - Environment-driven configuration
//!
//! # Example
//!
//! ```
//! use hippo::{coerce, parse_document, resolve};
//!
//! let limit: i32 = coerce("25");
//! assert_eq!(limit, 25);
//!
//! let doc = parse_document(r#"{"User": {"Name": "Ann"}}"#).unwrap();
//! let name: String = resolve(&doc, &["user.name"]);
//! assert_eq!(name, "Ann");
//! ```

pub mod config;

// Re-export all public APIs from internal crates
pub use hippo_coerce as coerce;
pub use hippo_diagnostics as diagnostics;
pub use hippo_types as types;

// Convenience re-exports
pub use config::Config;
pub use hippo_coerce::{
    Coerce, Coerced, Destination, QueryParams, coerce, coerce_list, lookup, resolve,
};
pub use hippo_diagnostics::{HippoError, Result};
pub use hippo_types::{
    DateOnly, DateTime, Document, Kind, Tz, Value, now, parse_document, set_timezone, timezone,
};

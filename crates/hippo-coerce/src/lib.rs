//! Typed value extraction
//!
//! This crate turns loosely-typed input into strongly-typed values:
//!
//! - **Scalars**: [`coerce`] parses one raw token into any [`Coerce`] type
//!   (`String`, `i16`, `i32`, `i64`, `f64`, `bool`, [`DateOnly`],
//!   [`DateTime`], `Option<T>`, `Vec<T>`, [`Document`])
//! - **Lists**: [`coerce_list`] splits a delimited token and coerces each piece
//! - **Documents**: [`resolve`] walks case-insensitive dotted paths through a
//!   [`Document`] and coerces the first leaf it finds
//! - **Runtime tags**: [`Destination`] does the same when the destination
//!   type is only known as text
//! - **Query strings**: [`QueryParams`] decodes and coerces named parameters
//!
//! # Example
//!
//! ```
//! use hippo_coerce::{coerce, coerce_list, resolve};
//! use hippo_types::parse_document;
//!
//! assert_eq!(coerce::<i32>("42"), 42);
//! assert_eq!(coerce::<i32>("forty-two"), 0);
//! assert_eq!(coerce_list::<i64>("1, 2,,3", ","), vec![1, 2, 3]);
//!
//! let doc = parse_document(r#"{"User": {"Name": "Ann"}}"#).unwrap();
//! assert_eq!(resolve::<String>(&doc, &["user.name"]), "Ann");
//! assert_eq!(resolve::<Option<String>>(&doc, &["user.email"]), None);
//! ```
//!
//! # Defaults
//!
//! Nothing here returns an error. Empty input yields the destination's zero
//! value, unparsable input yields the zero value (or "now" for the temporal
//! types), and a document path that resolves nowhere yields
//! [`Coerce::missing`].

pub mod destination;
pub mod helpers;
pub mod list;
pub mod query;
pub mod resolve;
pub mod scalar;

pub use destination::{Coerced, Destination};
pub use helpers::{eq_present, round_to};
pub use list::{DEFAULT_DELIMITER, coerce_list};
pub use query::QueryParams;
pub use resolve::{lookup, resolve};
pub use scalar::{Coerce, coerce};

pub use hippo_types::{DateOnly, DateTime, Document, Kind, Value};

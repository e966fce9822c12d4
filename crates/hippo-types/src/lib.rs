//! Hippo value types
//!
//! This crate defines the data the extraction engine works on:
//! - Dynamic documents ([`Value`], [`Document`])
//! - Timezone-aware temporal values ([`DateOnly`], [`DateTime`])
//! - The process-wide timezone setting
//! - Scalar destination kinds ([`Kind`])

pub mod system_types;
pub mod temporal;
pub mod timezone;
pub mod value;

pub use system_types::*;
pub use temporal::{DateOnly, DateTime};
pub use timezone::{now, now_in, parse_timezone, set_timezone, timezone};
pub use value::{Document, Value, document_from_json, parse_document};

pub use chrono_tz::Tz;

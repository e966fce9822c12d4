//! Error handling for the hippo workspace
//!
//! The extraction engine itself is total and never fails. Errors only exist
//! at its edges: configuring the process timezone, loading configuration,
//! decoding documents and naming destination types at runtime.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for hippo operations
pub type Result<T> = std::result::Result<T, HippoError>;

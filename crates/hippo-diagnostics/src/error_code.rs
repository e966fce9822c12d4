//! Hippo error codes
//!
//! Error code ranges:
//! - HPO0001-HPO0099: Configuration errors (timezone, environment)
//! - HPO0100-HPO0199: Input errors (documents, destination types, I/O)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const INVALID_TIMEZONE: Self = Self(1);
    pub const TIMEZONE_ALREADY_SET: Self = Self(2);
    pub const INVALID_CONFIG: Self = Self(3);
    pub const UNKNOWN_TYPE: Self = Self(100);
    pub const INVALID_DOCUMENT: Self = Self(101);
    pub const IO: Self = Self(102);

    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        match self.0 {
            1 => &INVALID_TIMEZONE,
            2 => &TIMEZONE_ALREADY_SET,
            3 => &INVALID_CONFIG,
            100 => &UNKNOWN_TYPE,
            101 => &INVALID_DOCUMENT,
            102 => &IO,
            _ => &UNKNOWN_ERROR,
        }
    }

    /// Check if this is a configuration error (0001-0099)
    pub const fn is_config_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is an input error (0100-0199)
    pub const fn is_input_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HPO{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static INVALID_TIMEZONE: ErrorInfo = ErrorInfo::new("Invalid timezone")
    .with_help("Use an IANA zone name such as `Europe/Berlin`, or leave TIMEZONE empty for UTC");
static TIMEZONE_ALREADY_SET: ErrorInfo = ErrorInfo::new("Timezone already configured")
    .with_help("The process timezone can only be set once, during startup");
static INVALID_CONFIG: ErrorInfo = ErrorInfo::new("Invalid configuration value");
static UNKNOWN_TYPE: ErrorInfo = ErrorInfo::new("Unknown destination type")
    .with_help("Expected one of string, int16, int, int64, float, bool, date, datetime or map, optionally written as ?T or T[]");
static INVALID_DOCUMENT: ErrorInfo = ErrorInfo::new("Invalid document");
static IO: ErrorInfo = ErrorInfo::new("I/O error");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::INVALID_TIMEZONE.to_string(), "HPO0001");
        assert_eq!(ErrorCode::UNKNOWN_TYPE.to_string(), "HPO0100");
    }

    #[test]
    fn test_error_code_ranges() {
        assert!(ErrorCode::TIMEZONE_ALREADY_SET.is_config_error());
        assert!(!ErrorCode::TIMEZONE_ALREADY_SET.is_input_error());
        assert!(ErrorCode::INVALID_DOCUMENT.is_input_error());
    }

    #[test]
    fn test_error_info_lookup() {
        assert_eq!(ErrorCode::IO.info().description, "I/O error");
        assert!(ErrorCode::INVALID_TIMEZONE.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}

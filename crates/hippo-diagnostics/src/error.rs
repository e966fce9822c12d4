//! Hippo error types

use crate::ErrorCode;
use thiserror::Error;

/// Errors raised at the edges of the extraction engine
#[derive(Debug, Error)]
pub enum HippoError {
    /// Timezone name is not a known IANA zone
    #[error("{code}: unknown timezone '{name}'", code = ErrorCode::INVALID_TIMEZONE)]
    InvalidTimezone { name: String },

    /// The process timezone was already initialised with another zone
    #[error(
        "{code}: timezone already set to {current}, refusing to switch to {requested}",
        code = ErrorCode::TIMEZONE_ALREADY_SET
    )]
    TimezoneAlreadySet { current: String, requested: String },

    /// A configuration entry holds an unusable value
    #[error("{code}: invalid value '{value}' for {key}", code = ErrorCode::INVALID_CONFIG)]
    InvalidConfig { key: String, value: String },

    /// A destination type tag could not be recognised
    #[error("{code}: unknown destination type '{name}'", code = ErrorCode::UNKNOWN_TYPE)]
    UnknownType { name: String },

    /// A document could not be decoded
    #[error("{code}: {message}", code = ErrorCode::INVALID_DOCUMENT)]
    Document {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// I/O failure while reading input
    #[error("{code}: {0}", code = ErrorCode::IO)]
    Io(#[from] std::io::Error),
}

impl HippoError {
    /// Create an invalid timezone error
    pub fn invalid_timezone(name: impl Into<String>) -> Self {
        Self::InvalidTimezone { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an unknown destination type error
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    /// Create a document error without an underlying decoder error
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document {
            message: message.into(),
            source: None,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidTimezone { .. } => ErrorCode::INVALID_TIMEZONE,
            Self::TimezoneAlreadySet { .. } => ErrorCode::TIMEZONE_ALREADY_SET,
            Self::InvalidConfig { .. } => ErrorCode::INVALID_CONFIG,
            Self::UnknownType { .. } => ErrorCode::UNKNOWN_TYPE,
            Self::Document { .. } => ErrorCode::INVALID_DOCUMENT,
            Self::Io(_) => ErrorCode::IO,
        }
    }

    /// Render the error with its help text, colored for a terminal
    #[cfg(feature = "colored")]
    pub fn render(&self) -> String {
        use colored::Colorize;

        let mut out = format!("{} {}", "error:".red().bold(), self);
        if let Some(help) = self.code().info().help {
            out.push_str(&format!("\n  {} {}", "help:".cyan().bold(), help));
        }
        out
    }
}

impl From<serde_json::Error> for HippoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Document {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_code() {
        let err = HippoError::invalid_timezone("Mars/Olympus");
        assert_eq!(err.to_string(), "HPO0001: unknown timezone 'Mars/Olympus'");
        assert_eq!(err.code(), ErrorCode::INVALID_TIMEZONE);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = HippoError::from(json_err);
        assert_eq!(err.code(), ErrorCode::INVALID_DOCUMENT);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error() {
        let err = HippoError::invalid_config("LOG_LEVEL", "loud");
        assert!(err.to_string().contains("LOG_LEVEL"));
        assert!(err.code().is_config_error());
    }
}

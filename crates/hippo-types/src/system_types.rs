//! Scalar destination kinds

use hippo_diagnostics::HippoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar types a value can be coerced into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Text
    String,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit float
    Float,
    /// Boolean
    Bool,
    /// Calendar date
    Date,
    /// Date and time of day
    DateTime,
}

impl Kind {
    /// All kinds, in declaration order
    pub const ALL: [Kind; 8] = [
        Self::String,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float,
        Self::Bool,
        Self::Date,
        Self::DateTime,
    ];

    /// Get the canonical tag
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int16 => "int16",
            Self::Int32 => "int",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::DateTime => "datetime",
        }
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int16 | Self::Int32 | Self::Int64 | Self::Float)
    }

    /// Check if this kind is temporal
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = HippoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "str" => Ok(Self::String),
            "int16" | "i16" => Ok(Self::Int16),
            "int" | "int32" | "i32" => Ok(Self::Int32),
            "int64" | "i64" => Ok(Self::Int64),
            "float" | "float64" | "f64" => Ok(Self::Float),
            "bool" | "boolean" => Ok(Self::Bool),
            "date" => Ok(Self::Date),
            "datetime" | "date-time" => Ok(Self::DateTime),
            _ => Err(HippoError::unknown_type(s)),
        }
    }
}

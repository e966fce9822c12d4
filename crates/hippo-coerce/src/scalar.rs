//! Scalar coercion
//!
//! The [`Coerce`] trait is the dispatch point: every supported destination
//! type says how to read itself from a raw token, from a document leaf, and
//! what to be when nothing was found.

use hippo_types::{DateOnly, DateTime, Document, Value};

/// A destination type the engine can produce.
///
/// Implementations must be total: every input maps to some value.
pub trait Coerce: Sized {
    /// Coerce one raw token.
    fn coerce(raw: &str) -> Self;

    /// Value returned when a document lookup finds none of its keys.
    fn missing() -> Self;

    /// Coerce a document leaf. Defaults to coercing the leaf's text.
    fn from_leaf(leaf: &Value) -> Self {
        Self::coerce(&leaf.to_text())
    }

    /// Coerce into `Option<Self>`.
    ///
    /// Empty input is absent, like the zero value of any optional. Types
    /// whose zero value is meaningful on its own override this.
    fn coerce_optional(raw: &str) -> Option<Self> {
        (!raw.is_empty()).then(|| Self::coerce(raw))
    }
}

/// Coerce `raw` into `T`.
pub fn coerce<T: Coerce>(raw: &str) -> T {
    T::coerce(raw)
}

/// Parse or fall back to the type's zero value
macro_rules! coerce_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                fn coerce(raw: &str) -> Self {
                    if raw.is_empty() {
                        return <$ty>::default();
                    }
                    raw.parse().unwrap_or_else(|_| {
                        tracing::trace!(
                            input = raw,
                            target_type = stringify!($ty),
                            "unparsable token, using zero value"
                        );
                        <$ty>::default()
                    })
                }

                fn missing() -> Self {
                    <$ty>::default()
                }
            }
        )*
    };
}

coerce_from_str!(i16, i32, i64, f64);

impl Coerce for String {
    fn coerce(raw: &str) -> Self {
        raw.to_string()
    }

    fn missing() -> Self {
        String::new()
    }
}

impl Coerce for bool {
    fn coerce(raw: &str) -> Self {
        parse_bool(raw).unwrap_or_else(|| {
            if !raw.is_empty() {
                tracing::trace!(input = raw, "unparsable boolean, using false");
            }
            false
        })
    }

    fn missing() -> Self {
        false
    }
}

/// Boolean literals: `1 t T TRUE true True` and `0 f F FALSE false False`
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl Coerce for DateOnly {
    fn coerce(raw: &str) -> Self {
        DateOnly::parse(raw)
    }

    /// The current instant, time of day included. Only unparsable text is
    /// truncated to midnight.
    fn missing() -> Self {
        DateOnly::from_datetime(hippo_types::now())
    }

    // The zero date is a real value here, so empty input stays present.
    fn coerce_optional(raw: &str) -> Option<Self> {
        Some(Self::coerce(raw))
    }
}

impl Coerce for DateTime {
    fn coerce(raw: &str) -> Self {
        DateTime::parse(raw)
    }

    fn missing() -> Self {
        DateTime::now()
    }

    fn coerce_optional(raw: &str) -> Option<Self> {
        Some(Self::coerce(raw))
    }
}

impl<T: Coerce> Coerce for Option<T> {
    fn coerce(raw: &str) -> Self {
        T::coerce_optional(raw)
    }

    fn missing() -> Self {
        None
    }

    fn from_leaf(leaf: &Value) -> Self {
        match leaf {
            Value::Null => None,
            Value::String(s) => T::coerce_optional(s),
            other => Some(T::from_leaf(other)),
        }
    }
}

/// Nested maps only come from document leaves; raw text is never decoded.
impl Coerce for Document {
    fn coerce(_raw: &str) -> Self {
        Document::new()
    }

    fn missing() -> Self {
        Document::new()
    }

    fn from_leaf(leaf: &Value) -> Self {
        leaf.as_map().cloned().unwrap_or_default()
    }
}

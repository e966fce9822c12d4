//! Delimited lists

use hippo_types::Value;

use crate::scalar::Coerce;

/// Delimiter used when a `Vec<T>` is coerced without an explicit one
pub const DEFAULT_DELIMITER: &str = ",";

/// Split `raw` on `delimiter` and coerce every non-blank piece.
///
/// Pieces are trimmed; blank pieces are dropped rather than turned into zero
/// values. Order and duplicates are preserved. An empty delimiter treats the
/// whole input as a single piece.
pub fn coerce_list<T: Coerce>(raw: &str, delimiter: &str) -> Vec<T> {
    if delimiter.is_empty() {
        return tokens(std::iter::once(raw));
    }
    tokens(raw.split(delimiter))
}

fn tokens<'a, T: Coerce>(pieces: impl Iterator<Item = &'a str>) -> Vec<T> {
    pieces
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(T::coerce)
        .collect()
}

impl<T: Coerce> Coerce for Vec<T> {
    fn coerce(raw: &str) -> Self {
        coerce_list(raw, DEFAULT_DELIMITER)
    }

    fn missing() -> Self {
        Vec::new()
    }

    /// Document lists are coerced element by element; other leaves are split.
    fn from_leaf(leaf: &Value) -> Self {
        match leaf {
            Value::List(items) => items
                .iter()
                .filter_map(|item| match item {
                    Value::Null => None,
                    Value::String(s) => {
                        let s = s.trim();
                        (!s.is_empty()).then(|| T::coerce(s))
                    }
                    other => Some(T::from_leaf(other)),
                })
                .collect(),
            other => Self::coerce(&other.to_text()),
        }
    }
}

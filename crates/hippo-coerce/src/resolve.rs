//! Case-insensitive document lookup
//!
//! Keys are dotted paths (`user.address.city`). Every segment matches map
//! keys case-insensitively. Intermediate segments only match entries holding
//! a nested map; the final segment only matches entries that are not null.
//! When several keys at one level match the same segment, the first in the
//! document's insertion order wins.

use hippo_types::{Document, Value};

use crate::scalar::Coerce;

/// Resolve the first candidate key that leads to a non-null leaf and coerce
/// it into `T`. Falls back to [`Coerce::missing`] when no candidate resolves.
pub fn resolve<T: Coerce>(document: &Document, keys: &[&str]) -> T {
    match keys.iter().find_map(|key| lookup(document, key)) {
        Some(leaf) => T::from_leaf(leaf),
        None => {
            tracing::trace!(?keys, "no candidate key resolved");
            T::missing()
        }
    }
}

/// Walk a dotted path through `document`.
pub fn lookup<'a>(document: &'a Document, path: &str) -> Option<&'a Value> {
    let (parents, last) = match path.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, path),
    };

    let mut current = document;
    if let Some(parents) = parents {
        for segment in parents.split('.') {
            current = current.iter().find_map(|(key, value)| match value {
                Value::Map(child) if same_key(key, segment) => Some(child),
                _ => None,
            })?;
        }
    }

    current
        .iter()
        .find(|(key, value)| same_key(key, last) && !value.is_null())
        .map(|(_, value)| value)
}

/// Simple case folding, Unicode-aware
fn same_key(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

//! Query-string binding
//!
//! Decodes an `application/x-www-form-urlencoded` query and coerces named
//! parameters. A parameter that is not present reads as the empty string,
//! so it follows the same zero-value rules as an empty token.

use hippo_types::{Document, Value};
use url::form_urlencoded;

use crate::list::coerce_list;
use crate::scalar::{Coerce, coerce};

/// Decoded query parameters, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode `query`. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First raw value for `name`. Names are case-sensitive.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).next()
    }

    /// Every raw value for `name`
    pub fn values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if `name` was sent at all
    pub fn contains(&self, name: &str) -> bool {
        self.first(name).is_some()
    }

    /// Coerce the first value of `name`.
    pub fn get<T: Coerce>(&self, name: &str) -> T {
        coerce(self.first(name).unwrap_or_default())
    }

    /// Coerce every value of a repeated parameter (`?id=1&id=2`).
    pub fn get_all<T: Coerce>(&self, name: &str) -> Vec<T> {
        self.values(name).map(coerce::<T>).collect()
    }

    /// Split the first value of `name` on `delimiter` (`?ids=1,2,3`).
    pub fn get_list<T: Coerce>(&self, name: &str, delimiter: &str) -> Vec<T> {
        coerce_list(self.first(name).unwrap_or_default(), delimiter)
    }

    /// View the parameters as a flat document, so they can be resolved with
    /// case-insensitive candidate keys. Repeated names become lists.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        for (key, value) in &self.pairs {
            match document.get_mut(key) {
                Some(Value::List(items)) => items.push(Value::from(value.as_str())),
                Some(existing) => {
                    let first = std::mem::take(existing);
                    *existing = Value::List(vec![first, Value::from(value.as_str())]);
                }
                None => {
                    document.insert(key.clone(), Value::from(value.as_str()));
                }
            }
        }
        document
    }

    /// Number of decoded pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if no pairs were decoded
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;

    #[test]
    fn test_decoding() {
        let q = QueryParams::parse("?name=Ann+Lee&city=S%C3%A3o%20Paulo&empty=");
        assert_eq!(q.first("name"), Some("Ann Lee"));
        assert_eq!(q.first("city"), Some("São Paulo"));
        assert_eq!(q.first("empty"), Some(""));
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn test_missing_parameter_is_zero() {
        let q = QueryParams::parse("page=2");
        assert_eq!(q.get::<i32>("page"), 2);
        assert_eq!(q.get::<i32>("size"), 0);
        assert_eq!(q.get::<Option<i32>>("size"), None);
        assert!(!q.contains("size"));
    }

    #[test]
    fn test_repeated_and_delimited() {
        let q = QueryParams::parse("id=1&id=x&id=3&tags=a,%20b,,c");
        assert_eq!(q.get::<i64>("id"), 1);
        assert_eq!(q.get_all::<i64>("id"), vec![1, 0, 3]);
        assert_eq!(
            q.get_list::<String>("tags", ","),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let q = QueryParams::parse("Page=4");
        assert_eq!(q.get::<i32>("page"), 0);
        // resolving through a document is case-insensitive
        assert_eq!(resolve::<i32>(&q.to_document(), &["page"]), 4);
    }

    #[test]
    fn test_to_document_groups_repeats() {
        let q = QueryParams::parse("a=1&b=2&a=3&a=4");
        let doc = q.to_document();
        assert_eq!(
            doc["a"],
            Value::List(vec![Value::from("1"), Value::from("3"), Value::from("4")])
        );
        assert_eq!(resolve::<Vec<i32>>(&doc, &["a"]), vec![1, 3, 4]);
        assert_eq!(resolve::<String>(&doc, &["b"]), "2");
    }
}

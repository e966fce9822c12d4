//! Subcommand implementations
//!
//! Each command turns its arguments into a [`Coerced`] value; printing is
//! left to `main`.

use anyhow::{Context, Result};
use hippo::{Coerced, DateTime, Destination, QueryParams, parse_document};
use std::io::Read;
use std::path::Path;

/// `hippo coerce`
pub fn coerce(tag: &str, raw: &str, delimiter: &str) -> Result<Coerced> {
    let destination: Destination = tag.parse()?;
    Ok(destination.coerce_delimited(raw, delimiter))
}

/// `hippo resolve`
pub fn resolve(tag: &str, document: &str, keys: &[String]) -> Result<Coerced> {
    let destination: Destination = tag.parse()?;
    let document = parse_document(document)?;
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    Ok(destination.resolve(&document, &keys))
}

/// `hippo query`
///
/// With `all`, every value of a repeated parameter is coerced and the
/// results are returned as a list.
pub fn query(tag: &str, query: &str, name: &str, delimiter: &str, all: bool) -> Result<Coerced> {
    let destination: Destination = tag.parse()?;
    let params = QueryParams::parse(query);
    tracing::debug!(pairs = params.len(), name, "decoded query");

    if all {
        let values = params
            .values(name)
            .map(|raw| destination.coerce_delimited(raw, delimiter))
            .collect();
        return Ok(Coerced::List(values));
    }
    Ok(destination.coerce_delimited(params.first(name).unwrap_or_default(), delimiter))
}

/// `hippo now`
pub fn now() -> Coerced {
    Coerced::DateTime(DateTime::now())
}

/// Read command input from a file, or from stdin for `None` and `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hippo::{HippoError, Kind};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("int", "42", Coerced::Int32(42))]
    #[case("int16", "99999", Coerced::Int16(0))]
    #[case("bool", "T", Coerced::Bool(true))]
    #[case("?float", "", Coerced::Absent)]
    #[case("string", " raw ", Coerced::String(" raw ".to_string()))]
    fn test_coerce(#[case] tag: &str, #[case] raw: &str, #[case] expected: Coerced) {
        assert_eq!(coerce(tag, raw, ",").unwrap(), expected);
    }

    #[test]
    fn test_coerce_list_with_delimiter() {
        assert_eq!(
            coerce("int64[]", "1;2;;3", ";").unwrap(),
            Coerced::List(vec![Coerced::Int64(1), Coerced::Int64(2), Coerced::Int64(3)])
        );
    }

    #[test]
    fn test_unknown_tag() {
        let err = coerce("uuid", "x", ",").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HippoError>(),
            Some(HippoError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_resolve() {
        let doc = r#"{"Order": {"Lines": [1, 2], "Ref": null}, "ref": "R-7"}"#;
        let keys = vec!["order.ref".to_string(), "ref".to_string()];
        assert_eq!(
            resolve("string", doc, &keys).unwrap(),
            Coerced::String("R-7".to_string())
        );
        assert_eq!(
            resolve("int[]", doc, &["order.lines".to_string()]).unwrap(),
            Coerced::List(vec![Coerced::Int32(1), Coerced::Int32(2)])
        );
        assert_eq!(
            resolve("?int", doc, &["order.total".to_string()]).unwrap(),
            Coerced::Absent
        );
    }

    #[test]
    fn test_resolve_rejects_bad_json() {
        let err = resolve("string", "[1, 2]", &["a".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HippoError>(),
            Some(HippoError::Document { .. })
        ));
    }

    #[test]
    fn test_query() {
        let q = "?page=3&tag=a&tag=b&ids=4|5";
        assert_eq!(query("int", q, "page", ",", false).unwrap(), Coerced::Int32(3));
        assert_eq!(query("int", q, "size", ",", false).unwrap(), Coerced::Int32(0));
        assert_eq!(
            query("string", q, "tag", ",", true).unwrap(),
            Coerced::List(vec![
                Coerced::String("a".to_string()),
                Coerced::String("b".to_string())
            ])
        );
        assert_eq!(
            query("int[]", q, "ids", "|", false).unwrap(),
            Destination::List(Kind::Int32).coerce("4,5")
        );
    }
}

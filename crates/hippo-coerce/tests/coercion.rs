//! Coercion behaviour through the public API
//!
//! Covers:
//! - Scalar literals and their zero-value fallbacks
//! - Empty vs unparsable temporal input
//! - Delimited lists
//! - Case-insensitive document resolution and the not-found defaults

use chrono::Utc;
use hippo_coerce::{DateOnly, DateTime, Document, coerce, coerce_list, resolve};
use hippo_types::{Value, document_from_json, parse_document};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

fn doc(json: serde_json::Value) -> Document {
    document_from_json(json).expect("test documents are objects")
}

fn close_to_now(dt: DateTime) -> bool {
    let delta = Utc::now().signed_duration_since(dt.instant());
    delta.num_seconds().abs() < 5
}

// === Scalars ===

proptest! {
    #[test]
    fn prop_integer_literals_round_trip(i in any::<i64>()) {
        prop_assert_eq!(coerce::<i64>(&i.to_string()), i);
    }

    #[test]
    fn prop_i16_literals_round_trip(i in any::<i16>()) {
        prop_assert_eq!(coerce::<i16>(&i.to_string()), i);
        prop_assert_eq!(coerce::<Option<i16>>(&i.to_string()), Some(i));
    }

    #[test]
    fn prop_float_literals_round_trip(x in -1.0e12f64..1.0e12) {
        prop_assert_eq!(coerce::<f64>(&x.to_string()), x);
    }

    #[test]
    fn prop_strings_pass_through(s in ".*") {
        prop_assert_eq!(coerce::<String>(&s), s);
    }
}

#[rstest]
#[case("0", 0)]
#[case("-15", -15)]
#[case("2147483647", i32::MAX)]
#[case("2147483648", 0)]
#[case("12abc", 0)]
#[case("", 0)]
fn test_i32_cases(#[case] raw: &str, #[case] expected: i32) {
    assert_eq!(coerce::<i32>(raw), expected);
}

#[test]
fn test_empty_input_is_zero_value() {
    assert_eq!(coerce::<String>(""), "");
    assert_eq!(coerce::<i16>(""), 0);
    assert_eq!(coerce::<i64>(""), 0);
    assert_eq!(coerce::<f64>(""), 0.0);
    assert!(!coerce::<bool>(""));
    assert_eq!(coerce::<Option<i64>>(""), None);
    assert_eq!(coerce::<Option<f64>>(""), None);
    assert_eq!(coerce::<Vec<i32>>(""), Vec::<i32>::new());
    assert!(coerce::<DateOnly>("").is_zero());
    assert!(coerce::<DateTime>("").is_zero());
}

// === Temporal ===

#[test]
fn test_unparsable_date_is_today() {
    let date = coerce::<DateOnly>("not-a-date");
    assert!(!date.is_zero());
    assert_eq!(date, DateOnly::today());
    assert_eq!(date.time().date_naive(), Utc::now().date_naive());
}

#[test]
fn test_unparsable_datetime_is_now() {
    let dt = coerce::<DateTime>("not-a-date");
    assert!(close_to_now(dt));
}

#[rstest]
#[case("2024-01-02", "2024-01-02T00:00:00Z")]
#[case("2024-01-02T15:04:05-07:00", "2024-01-02T15:04:05-07:00")]
#[case("2024-01-02T15:04:05Z", "2024-01-02T15:04:05Z")]
fn test_date_inputs(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(coerce::<DateOnly>(raw).to_string(), expected);
}

#[rstest]
#[case("2024-01-02 15:04:05", "2024-01-02T15:04:05Z")]
#[case("2024-01-02T15:04:05+01:00", "2024-01-02T15:04:05+01:00")]
fn test_datetime_inputs(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(coerce::<DateTime>(raw).to_string(), expected);
}

#[test]
fn test_optional_temporal_always_present() {
    assert!(coerce::<Option<DateTime>>("garbage").is_some_and(close_to_now));
    assert_eq!(
        coerce::<Option<DateOnly>>("2024-06-30").map(|d| d.to_string()),
        Some("2024-06-30T00:00:00Z".to_string())
    );
}

// === Lists ===

#[test]
fn test_list_spec_example() {
    assert_eq!(coerce_list::<i32>("1, 2,,3", ","), vec![1, 2, 3]);
    assert_eq!(coerce_list::<i32>("", ","), Vec::<i32>::new());
}

#[test]
fn test_list_of_dates() {
    let dates = coerce_list::<DateOnly>("2024-01-01; 2024-02-01", ";");
    let rendered: Vec<String> = dates.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z"]);
}

// === Resolution ===

#[test]
fn test_resolve_nested_case_insensitive() {
    let d = doc(json!({"User": {"Name": "Ann"}}));
    assert_eq!(resolve::<String>(&d, &["user.name"]), "Ann");
}

#[test]
fn test_resolve_missing_string() {
    let d = Document::new();
    assert_eq!(resolve::<String>(&d, &["missing.path"]), "");
    assert_eq!(resolve::<Option<String>>(&d, &["missing.path"]), None);
}

#[test]
fn test_resolve_missing_temporal() {
    let d = doc(json!({"other": "2020-01-01 00:00:00"}));
    assert_eq!(resolve::<Option<DateTime>>(&d, &["created_at"]), None);
    assert_eq!(resolve::<Option<DateOnly>>(&d, &["created_at"]), None);
    assert!(close_to_now(resolve::<DateTime>(&d, &["created_at"])));
    let date = resolve::<DateOnly>(&d, &["created_at"]);
    assert!(close_to_now(DateTime::from_datetime(date.instant())));
}

#[test]
fn test_resolve_typed_leaves() {
    let d = doc(json!({
        "order": {
            "ID": 1042,
            "Total": "19.90",
            "paid": true,
            "placed": "2024-03-01 10:30:00",
            "items": [3, "4", null],
            "meta": {"source": "web"}
        }
    }));

    assert_eq!(resolve::<i64>(&d, &["order.id"]), 1042);
    assert_eq!(resolve::<String>(&d, &["order.id"]), "1042");
    assert_eq!(resolve::<f64>(&d, &["order.total"]), 19.9);
    assert!(resolve::<bool>(&d, &["order.PAID"]));
    assert_eq!(
        resolve::<DateTime>(&d, &["order.placed"]).to_string(),
        "2024-03-01T10:30:00Z"
    );
    assert_eq!(resolve::<Vec<i32>>(&d, &["order.items"]), vec![3, 4]);

    let meta = resolve::<Document>(&d, &["order.meta"]);
    assert_eq!(meta.get("source"), Some(&Value::from("web")));
}

#[test]
fn test_resolve_present_but_malformed() {
    let d = doc(json!({"count": "many", "when": "someday", "blank": ""}));
    assert_eq!(resolve::<i32>(&d, &["count"]), 0);
    assert_eq!(resolve::<Option<i32>>(&d, &["count"]), Some(0));
    assert_eq!(resolve::<Option<i32>>(&d, &["blank"]), None);
    assert!(close_to_now(resolve::<DateTime>(&d, &["when"])));
    assert!(resolve::<DateTime>(&d, &["blank"]).is_zero());
}

#[test]
fn test_resolve_null_falls_through_to_next_candidate() {
    let d = doc(json!({"email": null, "contact": {"email": "a@b.c"}}));
    assert_eq!(
        resolve::<Option<String>>(&d, &["email", "contact.email"]),
        Some("a@b.c".to_string())
    );
}

#[rstest]
#[case(r#"{"id": 18446744073709551615}"#, "18446744073709551615")]
#[case(r#"{"id": -9223372036854775809}"#, "-9223372036854775809")]
#[case(r#"{"id": 1.10}"#, "1.10")]
#[case(r#"{"id": 3.0}"#, "3.0")]
#[case(r#"{"id": 2e3}"#, "2e3")]
fn test_resolve_number_leaf_keeps_text(#[case] json: &str, #[case] expected: &str) {
    let d = parse_document(json).unwrap();
    assert_eq!(resolve::<String>(&d, &["id"]), expected);
}

#[rstest]
#[case(r#"{"n": 3.0}"#, 0)]
#[case(r#"{"n": 3}"#, 3)]
#[case(r#"{"n": 18446744073709551615}"#, 0)]
fn test_resolve_number_leaf_as_integer(#[case] json: &str, #[case] expected: i32) {
    let d = parse_document(json).unwrap();
    assert_eq!(resolve::<i32>(&d, &["n"]), expected);
}

#[test]
fn test_resolve_u64_leaf_as_float() {
    let d = parse_document(r#"{"big": 18446744073709551615}"#).unwrap();
    assert_eq!(resolve::<f64>(&d, &["big"]), 18446744073709551615.0);
}

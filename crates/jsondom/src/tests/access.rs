use alloc::vec;

use crate::{Member, ParseError, Value, ValueKind, parse};

#[test]
fn default_is_null() {
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn setters_release_the_previous_payload() {
    let mut value = Value::default();
    value.set_string("a");
    value.set_boolean(true);
    assert_eq!(value.as_bool(), Some(true));
    value.set_boolean(false);
    assert_eq!(value.as_bool(), Some(false));
    value.set_number(1234.5);
    assert_eq!(value.as_f64(), Some(1234.5));
    value.set_string("Hello");
    assert_eq!(value.as_str(), Some("Hello"));
    value.set_string("");
    assert_eq!(value.as_str(), Some(""));
}

#[test]
fn set_null_is_idempotent() {
    let mut value = parse(r#"{"a":[1,2]}"#).unwrap();
    value.set_null();
    value.set_null();
    assert_eq!(value.kind(), ValueKind::Null);
}

#[test]
fn accessors_reject_other_variants() {
    let value = Value::Number(1.0);
    assert_eq!(value.as_bool(), None);
    assert_eq!(value.as_str(), None);
    assert_eq!(value.as_array(), None);
    assert_eq!(value.as_object(), None);
    assert_eq!(Value::Null.as_f64(), None);
}

#[test]
fn take_moves_and_leaves_null() {
    let mut value = Value::from("melon");
    let moved = value.take();
    assert_eq!(moved, Value::String("melon".into()));
    assert!(value.is_null());
}

#[test]
fn swap_exchanges_contents_in_place() {
    let mut a = Value::from("melon");
    let mut b = Value::from(vec![Value::Null]);
    a.swap(&mut b);
    assert_eq!(a, Value::Array(vec![Value::Null]));
    assert_eq!(b, Value::String("melon".into()));
}

#[test]
fn clone_is_a_deep_copy() {
    let original = parse(r#"{"a":[1,2],"o":{"k":"v"}}"#).unwrap();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.get_mut("a")
        .unwrap()
        .as_array_mut()
        .unwrap()
        .push(Value::Null);
    assert_ne!(copy, original);
    assert_eq!(original.get("a").unwrap().as_array().unwrap().len(), 2);
}

#[test]
fn numbers_compare_with_ieee_semantics() {
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    assert_eq!(Value::Number(0.0), Value::Number(-0.0));
}

#[test]
fn strings_compare_byte_exact() {
    assert_eq!(Value::from("a\u{0}b"), Value::from("a\u{0}b"));
    assert_ne!(Value::from("a"), Value::from("a\u{0}"));
}

#[test]
fn array_equality_is_element_wise() {
    assert_eq!(parse("[1,2]").unwrap(), parse("[ 1 , 2 ]").unwrap());
    assert_ne!(parse("[1,2]").unwrap(), parse("[2,1]").unwrap());
    assert_ne!(parse("[1,2]").unwrap(), parse("[1]").unwrap());
}

#[test]
fn object_equality_is_order_sensitive() {
    let ab = parse(r#"{"a":1,"b":2}"#).unwrap();
    let ba = parse(r#"{"b":2,"a":1}"#).unwrap();
    assert_ne!(ab, ba);
    assert_eq!(ab, parse(r#"{"a":1,"b":2}"#).unwrap());
}

#[test]
fn equality_requires_matching_kinds() {
    assert_ne!(Value::Null, Value::Boolean(false));
    assert_ne!(Value::Number(0.0), Value::String("0".into()));
    assert_ne!(Value::Array(vec![]), Value::Object(vec![]));
}

#[test]
fn find_member_scans_in_insertion_order() {
    let value = parse(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    assert_eq!(value.find_member("a"), Some(0));
    assert_eq!(value.find_member("b"), Some(1));
    assert_eq!(value.find_member("c"), None);
    assert_eq!(value.get("a"), Some(&Value::Number(1.0)));
}

#[test]
fn get_mut_reaches_the_first_match() {
    let mut value = parse(r#"{"a":1,"a":2}"#).unwrap();
    *value.get_mut("a").unwrap() = Value::Boolean(true);
    let members = value.as_object().unwrap();
    assert_eq!(members[0].value, Value::Boolean(true));
    assert_eq!(members[1].value, Value::Number(2.0));
}

#[test]
fn keys_with_embedded_nul_compare_byte_exact() {
    let value = Value::Object(vec![Member::new("a\u{0}b", 1.0)]);
    assert_eq!(value.find_member("a\u{0}b"), Some(0));
    assert_eq!(value.find_member("a"), None);
}

#[test]
fn finders_return_none_for_non_objects() {
    assert_eq!(Value::Null.get("a"), None);
    assert_eq!(Value::Array(vec![]).find_member("a"), None);
    assert_eq!(Value::from(1.0).get_mut("a"), None);
}

#[test]
fn conversions_build_the_expected_variants() {
    assert_eq!(Value::from(true), Value::Boolean(true));
    assert_eq!(Value::from(1.5), Value::Number(1.5));
    assert_eq!(Value::from("s"), Value::String("s".into()));
    assert_eq!(Value::from(vec![Value::Null]).kind(), ValueKind::Array);
    assert_eq!(
        Value::from(vec![Member::new("k", Value::Null)]).kind(),
        ValueKind::Object
    );
}

#[test]
fn from_str_parses_json_text() {
    let value: Value = "[true]".parse().unwrap();
    assert_eq!(value, Value::Array(vec![Value::Boolean(true)]));
    assert_eq!("bogus".parse::<Value>(), Err(ParseError::InvalidValue));
}

#[test]
fn predicates_match_the_variant() {
    assert!(Value::Null.is_null());
    assert!(Value::Boolean(false).is_boolean());
    assert!(Value::Number(0.0).is_number());
    assert!(Value::from("").is_string());
    assert!(Value::Array(vec![]).is_array());
    assert!(Value::Object(vec![]).is_object());
    assert!(!Value::Null.is_object());
}

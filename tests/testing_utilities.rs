//! Tests for the assertion macros, used the way downstream crates would use
//! them in their own test suites.

use bad_checks::prelude::*;
use bad_checks::{assert_fault, assert_invalid, assert_valid, checks};

fn parse_port(value: &Value) -> Result<CheckResult, Fault> {
    let (_msgs, [is_bad_integer]) =
        bind_bad_checks(&"parse_port()".into(), [checks::integer().into()])?;
    is_bad_integer.call(&[value.clone(), "port".into(), 1.into(), 65535.into()])
}

#[test]
fn test_assert_valid_on_bound_check() {
    assert_valid!(parse_port(&8080.into()).unwrap());
}

#[test]
fn test_assert_invalid_with_explanation() {
    assert_invalid!(parse_port(&0.into()).unwrap());
    assert_invalid!(
        parse_port(&70000.into()).unwrap(),
        "parse_port(): port is 70000 which is greater than the maximum 65535"
    );
}

#[test]
fn test_assert_fault_on_misuse() {
    assert_fault!(
        is_bad_integer(&"p".into(), &Value::Null, &1.into(), &IntegerBounds::new()),
        "Error: is_bad_integer(): check_msgs is null not an array"
    );
    assert_fault!(
        checks::integer().call(&"p".into(), &Value::from(vec![]), &[1.into(), "n".into(), Value::Null]),
        "Error: is_bad_integer(): min is null not type 'number'"
    );
}

#[test]
#[should_panic(expected = "Expected Invalid with explanation")]
fn test_assert_invalid_panics_on_valid() {
    assert_invalid!(parse_port(&80.into()).unwrap(), "anything");
}

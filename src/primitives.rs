//! Primitive checks
//!
//! These are the formatting building blocks that the composed checks share.
//! They trust their caller: the prefix and identifier are plain `&str`, and
//! nothing here can fault or touch a message list.

use crate::{CheckResult, Kind, Value};

/// What to call a value in an explanation when no identifier was given.
pub(crate) const DEFAULT_IDENTIFIER: &str = "A value";

pub(crate) fn identify(identifier: &str) -> &str {
    if identifier.is_empty() {
        DEFAULT_IDENTIFIER
    } else {
        identifier
    }
}

/// Check a value's [`Kind`].
///
/// `null` and arrays get their own wording, since both classify as
/// [`Kind::Object`]. For the same reason, `null` and arrays are valid when
/// `expected` is `Kind::Object`, and `NaN` is a valid `Kind::Number`.
///
/// # Example
///
/// ```rust
/// use bad_checks::{is_bad_type, CheckResult, Kind, Value};
///
/// assert_eq!(is_bad_type("t", &Value::from(true), "flag", Kind::Boolean), CheckResult::Valid);
/// assert_eq!(
///     is_bad_type("t", &Value::Null, "flag", Kind::Boolean).explanation(),
///     Some("t: flag is null not type 'boolean'")
/// );
/// assert_eq!(
///     is_bad_type("t", &Value::from(5), "", Kind::String).explanation(),
///     Some("t: A value is type 'number' not 'string'")
/// );
/// ```
pub fn is_bad_type(msg_prefix: &str, value: &Value, identifier: &str, expected: Kind) -> CheckResult {
    let actual = value.kind();
    if actual == expected {
        return CheckResult::Valid;
    }
    let id = identify(identifier);
    CheckResult::invalid(match value {
        Value::Null => format!("{}: {} is null not type '{}'", msg_prefix, id, expected),
        Value::Array(_) => format!("{}: {} is an array not type '{}'", msg_prefix, id, expected),
        _ => format!("{}: {} is type '{}' not '{}'", msg_prefix, id, actual, expected),
    })
}

/// Check that a value is an array.
///
/// # Example
///
/// ```rust
/// use bad_checks::{is_bad_array, Value};
///
/// assert!(is_bad_array("p", &Value::from(vec![]), "list").is_valid());
/// assert_eq!(
///     is_bad_array("p", &Value::Null, "list").explanation(),
///     Some("p: list is null not an array")
/// );
/// ```
pub fn is_bad_array(msg_prefix: &str, value: &Value, identifier: &str) -> CheckResult {
    let id = identify(identifier);
    match value {
        Value::Array(_) => CheckResult::Valid,
        Value::Null => CheckResult::invalid(format!("{}: {} is null not an array", msg_prefix, id)),
        other => CheckResult::invalid(format!(
            "{}: {} is type '{}' not an array",
            msg_prefix,
            id,
            other.kind()
        )),
    }
}

/// Check that a value is exactly `null`.
///
/// `Undefined` is not `null`.
///
/// # Example
///
/// ```rust
/// use bad_checks::{is_bad_null, Value};
///
/// assert!(is_bad_null("p", &Value::Null, "x").is_valid());
/// assert_eq!(
///     is_bad_null("p", &Value::Undefined, "x").explanation(),
///     Some("p: x is type 'undefined' not null")
/// );
/// ```
pub fn is_bad_null(msg_prefix: &str, value: &Value, identifier: &str) -> CheckResult {
    let id = identify(identifier);
    match value {
        Value::Null => CheckResult::Valid,
        Value::Array(_) => CheckResult::invalid(format!("{}: {} is an array not null", msg_prefix, id)),
        other => CheckResult::invalid(format!(
            "{}: {} is type '{}' not null",
            msg_prefix,
            id,
            other.kind()
        )),
    }
}

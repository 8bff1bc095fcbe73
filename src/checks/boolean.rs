//! Boolean check

use super::args::{Args, Session};
use crate::bind::BadCheck;
use crate::{is_bad_type, CheckResult, Fault, Kind, Value};

const FUNCTION: &str = "is_bad_boolean";

/// Validate a boolean.
///
/// Faults if `msg_prefix` is not a string, or `check_msgs` is not an array
/// of strings. Otherwise an explanation is appended to `check_msgs` and
/// returned when `value` is not a boolean.
///
/// # Example
///
/// ```rust
/// use bad_checks::{is_bad_boolean, Array, CheckResult, Value};
///
/// let msgs = Array::new();
/// let result = is_bad_boolean(&"a".into(), &msgs.clone().into(), &Value::Null, "b").unwrap();
///
/// assert_eq!(result.explanation(), Some("a: b is null not type 'boolean'"));
/// assert_eq!(msgs.strings(), vec!["a: b is null not type 'boolean'".to_string()]);
/// ```
pub fn is_bad_boolean(
    msg_prefix: &Value,
    check_msgs: &Value,
    value: &Value,
    identifier: &str,
) -> Result<CheckResult, Fault> {
    let session = Session::open(FUNCTION, msg_prefix, check_msgs)?;
    Ok(session.record(is_bad_type(session.prefix, value, identifier, Kind::Boolean)))
}

/// [`is_bad_boolean`] in binder form, taking `(value, identifier?)`.
pub fn bad_check() -> BadCheck {
    BadCheck::new(FUNCTION, |msg_prefix, check_msgs, args| {
        let session = Session::open(FUNCTION, msg_prefix, check_msgs)?;
        let args = Args::new(FUNCTION, args);
        let identifier = args.string(1, "identifier")?;
        Ok(session.record(is_bad_type(session.prefix, &args.value(), identifier, Kind::Boolean)))
    })
}

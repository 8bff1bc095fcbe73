//! String check

use super::args::{Args, Session};
use crate::bind::BadCheck;
use crate::{is_bad_type, CheckResult, Fault, Kind, Value};

const FUNCTION: &str = "is_bad_string";

/// Validate a string.
///
/// Faults on a bad `msg_prefix` or `check_msgs`, exactly like
/// [`is_bad_boolean`](crate::is_bad_boolean). The empty string is a valid
/// string.
///
/// # Example
///
/// ```rust
/// use bad_checks::{is_bad_string, Array, CheckResult, Value};
/// use std::collections::BTreeMap;
///
/// let msgs = Value::from(Array::new());
///
/// assert_eq!(is_bad_string(&"e".into(), &msgs, &"".into(), "f").unwrap(), CheckResult::Valid);
/// assert_eq!(
///     is_bad_string(&"e".into(), &msgs, &Value::Object(BTreeMap::new()), "f")
///         .unwrap()
///         .explanation(),
///     Some("e: f is type 'object' not 'string'")
/// );
/// ```
pub fn is_bad_string(
    msg_prefix: &Value,
    check_msgs: &Value,
    value: &Value,
    identifier: &str,
) -> Result<CheckResult, Fault> {
    let session = Session::open(FUNCTION, msg_prefix, check_msgs)?;
    Ok(session.record(is_bad_type(session.prefix, value, identifier, Kind::String)))
}

/// [`is_bad_string`] in binder form, taking `(value, identifier?)`.
pub fn bad_check() -> BadCheck {
    BadCheck::new(FUNCTION, |msg_prefix, check_msgs, args| {
        let session = Session::open(FUNCTION, msg_prefix, check_msgs)?;
        let args = Args::new(FUNCTION, args);
        let identifier = args.string(1, "identifier")?;
        Ok(session.record(is_bad_type(session.prefix, &args.value(), identifier, Kind::String)))
    })
}

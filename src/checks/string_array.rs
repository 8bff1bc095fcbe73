//! String array check

use super::args::{Args, Session};
use crate::bind::BadCheck;
use crate::primitives::identify;
use crate::{is_bad_array, is_bad_type, CheckResult, Fault, Kind, Value};

const FUNCTION: &str = "is_bad_string_array";

fn explain(msg_prefix: &str, value: &Value, identifier: &str) -> CheckResult {
    let Value::Array(items) = value else {
        return is_bad_array(msg_prefix, value, identifier);
    };
    let id = identify(identifier);
    let items = items.borrow();
    let first_bad = items
        .iter()
        .enumerate()
        .map(|(i, item)| is_bad_type(msg_prefix, item, &format!("{}[{}]", id, i), Kind::String))
        .find(CheckResult::is_invalid);
    first_bad.unwrap_or_default()
}

/// Validate an array of strings.
///
/// Only the first offending element is reported.
///
/// # Example
///
/// ```rust
/// use bad_checks::{is_bad_string_array, Array, Value};
///
/// let msgs = Value::from(Array::new());
/// let names = Value::from(vec![Value::from("ada"), Value::Null]);
///
/// assert_eq!(
///     is_bad_string_array(&"p".into(), &msgs, &names, "names").unwrap().explanation(),
///     Some("p: names[1] is null not type 'string'")
/// );
/// ```
pub fn is_bad_string_array(
    msg_prefix: &Value,
    check_msgs: &Value,
    value: &Value,
    identifier: &str,
) -> Result<CheckResult, Fault> {
    let session = Session::open(FUNCTION, msg_prefix, check_msgs)?;
    Ok(session.record(explain(session.prefix, value, identifier)))
}

/// [`is_bad_string_array`] in binder form, taking `(value, identifier?)`.
pub fn bad_check() -> BadCheck {
    BadCheck::new(FUNCTION, |msg_prefix, check_msgs, args| {
        let session = Session::open(FUNCTION, msg_prefix, check_msgs)?;
        let args = Args::new(FUNCTION, args);
        let identifier = args.string(1, "identifier")?;
        Ok(session.record(explain(session.prefix, &args.value(), identifier)))
    })
}

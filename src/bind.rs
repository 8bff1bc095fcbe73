//! Binding checks to a shared prefix and message list
//!
//! A function usually validates several arguments, and wants every
//! explanation to start with its own name and to land in one list. The
//! binder captures both once:
//!
//! ```rust
//! use bad_checks::{bind_bad_checks, checks, Value};
//!
//! fn scale(factor: &Value, label: &Value) -> Result<(), Vec<String>> {
//!     let (msgs, [is_bad_integer, is_bad_string]) =
//!         bind_bad_checks(&"scale()".into(), [checks::integer().into(), checks::string().into()])
//!             .map_err(|fault| vec![fault.to_string()])?;
//!
//!     let _ = is_bad_integer.call(&[factor.clone(), "factor".into(), 1.into(), 10.into()]);
//!     let _ = is_bad_string.call(&[label.clone(), "label".into()]);
//!
//!     if msgs.is_empty() { Ok(()) } else { Err(msgs.strings()) }
//! }
//!
//! assert_eq!(scale(&4.into(), &"x".into()), Ok(()));
//! assert_eq!(
//!     scale(&40.into(), &Value::Null),
//!     Err(vec![
//!         "scale(): factor is 40 which is greater than the maximum 10".to_string(),
//!         "scale(): label is null not type 'string'".to_string(),
//!     ])
//! );
//! ```

use std::fmt;
use std::rc::Rc;

use crate::{Array, CheckResult, Fault, Value};

const FUNCTION: &str = "bind_bad_checks";

type CheckFn = dyn Fn(&Value, &Value, &[Value]) -> Result<CheckResult, Fault>;

/// A check before binding: `(msg_prefix, check_msgs, args) -> result`.
///
/// Cloning is cheap and keeps the same underlying function.
///
/// # Example
///
/// ```rust
/// use bad_checks::{BadCheck, CheckResult, Value};
///
/// let always_bad = BadCheck::new("always_bad", |prefix, msgs, _args| {
///     let msg = format!("{}: always bad", prefix.as_str().unwrap_or_default());
///     if let Some(msgs) = msgs.as_array() {
///         msgs.push(msg.as_str());
///     }
///     Ok(CheckResult::Invalid(msg))
/// });
///
/// let r = always_bad.call(&"p".into(), &Value::from(vec![]), &[]).unwrap();
/// assert_eq!(r.explanation(), Some("p: always bad"));
/// ```
#[derive(Clone)]
pub struct BadCheck {
    name: Rc<str>,
    run: Rc<CheckFn>,
}

impl BadCheck {
    /// Wrap a function as a check.
    pub fn new<F>(name: impl Into<Rc<str>>, run: F) -> Self
    where
        F: Fn(&Value, &Value, &[Value]) -> Result<CheckResult, Fault> + 'static,
    {
        BadCheck {
            name: name.into(),
            run: Rc::new(run),
        }
    }

    /// The name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the check.
    pub fn call(
        &self,
        msg_prefix: &Value,
        check_msgs: &Value,
        args: &[Value],
    ) -> Result<CheckResult, Fault> {
        (self.run)(msg_prefix, check_msgs, args)
    }
}

impl PartialEq for BadCheck {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.run, &other.run)
    }
}

impl fmt::Debug for BadCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BadCheck").field(&self.name).finish()
    }
}

/// A check with its prefix and message list already supplied.
#[derive(Debug, Clone)]
pub struct BoundCheck {
    msg_prefix: String,
    check_msgs: Array,
    check: BadCheck,
}

impl BoundCheck {
    fn new(msg_prefix: &str, check_msgs: &Array, check: BadCheck) -> Self {
        BoundCheck {
            msg_prefix: msg_prefix.to_string(),
            check_msgs: check_msgs.clone(),
            check,
        }
    }

    /// Forward `(msg_prefix, check_msgs, args...)` to the underlying check,
    /// returning its result unchanged.
    pub fn call(&self, args: &[Value]) -> Result<CheckResult, Fault> {
        self.check.call(
            &Value::String(self.msg_prefix.clone()),
            &Value::Array(self.check_msgs.clone()),
            args,
        )
    }

    /// The bound prefix.
    pub fn prefix(&self) -> &str {
        &self.msg_prefix
    }

    /// The shared message list.
    pub fn messages(&self) -> &Array {
        &self.check_msgs
    }

    /// The underlying check.
    pub fn check(&self) -> &BadCheck {
        &self.check
    }
}

fn validate_prefix(msg_prefix: &Value) -> Result<&str, Fault> {
    match msg_prefix {
        Value::String(s) => Ok(s),
        Value::Null => Err(Fault::argument_kind(FUNCTION, "msg_prefix", "is null not 'string'")),
        other => Err(Fault::argument_kind(
            FUNCTION,
            "msg_prefix",
            format!("is type '{}' not 'string'", other.kind()),
        )),
    }
}

fn validate_checks(bad_checks: &[Value]) -> Result<Vec<BadCheck>, Fault> {
    bad_checks
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::Function(check) => Ok(check.clone()),
            other => Err(Fault::argument_kind(
                FUNCTION,
                format!("bad_checks[{}]", i),
                format!("is type '{}' not 'function'", other.kind()),
            )),
        })
        .collect()
}

/// Bind a fixed number of checks to `msg_prefix` and a fresh message list.
///
/// Returns the new, empty list and one [`BoundCheck`] per input, in order.
/// Every call allocates its own list.
///
/// # Example
///
/// ```rust
/// use bad_checks::{bind_bad_checks, checks, Value};
///
/// let (msgs, [is_bad_boolean]) =
///     bind_bad_checks(&"toggle()".into(), [checks::boolean().into()]).unwrap();
///
/// let r = is_bad_boolean.call(&[Value::from("yes"), "on".into()]).unwrap();
/// assert_eq!(r.explanation(), Some("toggle(): on is type 'string' not 'boolean'"));
/// assert_eq!(msgs.len(), 1);
///
/// let err = bind_bad_checks(&Value::Null, []).unwrap_err();
/// assert_eq!(err.to_string(), "Error: bind_bad_checks(): msg_prefix is null not 'string'");
/// ```
pub fn bind_bad_checks<const N: usize>(
    msg_prefix: &Value,
    bad_checks: [Value; N],
) -> Result<(Array, [BoundCheck; N]), Fault> {
    let prefix = validate_prefix(msg_prefix)?;
    let checks = validate_checks(&bad_checks)?;
    let check_msgs = Array::new();

    #[cfg(feature = "tracing")]
    tracing::trace!(msg_prefix = prefix, checks = N, "binding checks");

    let bound = std::array::from_fn(|i| BoundCheck::new(prefix, &check_msgs, checks[i].clone()));
    Ok((check_msgs, bound))
}

/// Like [`bind_bad_checks`], for a number of checks only known at runtime.
pub fn bind_bad_checks_vec(
    msg_prefix: &Value,
    bad_checks: &[Value],
) -> Result<(Array, Vec<BoundCheck>), Fault> {
    let prefix = validate_prefix(msg_prefix)?;
    let checks = validate_checks(bad_checks)?;
    let check_msgs = Array::new();

    #[cfg(feature = "tracing")]
    tracing::trace!(msg_prefix = prefix, checks = checks.len(), "binding checks");

    let bound = checks
        .into_iter()
        .map(|check| BoundCheck::new(prefix, &check_msgs, check))
        .collect();
    Ok((check_msgs, bound))
}

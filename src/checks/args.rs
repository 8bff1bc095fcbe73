//! Argument validation shared by the composed checks

use crate::value::format_number;
use crate::{Array, CheckResult, Fault, Kind, Value};

/// Why `value` is not of kind `expected`, in fault wording.
pub(crate) fn not_kind(value: &Value, expected: Kind) -> String {
    match value {
        Value::Null => format!("is null not type '{}'", expected),
        Value::Array(_) => format!("is an array not type '{}'", expected),
        other => format!("is type '{}' not type '{}'", other.kind(), expected),
    }
}

/// A validated `msg_prefix` and `check_msgs` pair.
///
/// Opening a session is the only thing that can fault on these two
/// arguments, so once a check holds one, the rest of the call can only
/// produce a [`CheckResult`].
#[derive(Debug)]
pub(crate) struct Session<'a> {
    pub(crate) prefix: &'a str,
    check_msgs: &'a Array,
}

impl<'a> Session<'a> {
    pub(crate) fn open(
        function: &'static str,
        msg_prefix: &'a Value,
        check_msgs: &'a Value,
    ) -> Result<Self, Fault> {
        let prefix = match msg_prefix {
            Value::String(s) => s.as_str(),
            other => {
                return Err(Fault::argument_kind(
                    function,
                    "msg_prefix",
                    not_kind(other, Kind::String),
                ))
            }
        };

        let check_msgs = match check_msgs {
            Value::Array(a) => a,
            Value::Null => {
                return Err(Fault::argument_kind(function, "check_msgs", "is null not an array"))
            }
            other => {
                return Err(Fault::argument_kind(
                    function,
                    "check_msgs",
                    format!("is type '{}' not an array", other.kind()),
                ))
            }
        };

        if let Some((i, item)) = check_msgs
            .borrow()
            .iter()
            .enumerate()
            .find(|(_, item)| item.as_str().is_none())
        {
            return Err(Fault::argument_kind(
                function,
                format!("check_msgs[{}]", i),
                not_kind(item, Kind::String),
            ));
        }

        Ok(Session { prefix, check_msgs })
    }

    /// Append the explanation, if any, and hand the result back.
    pub(crate) fn record(&self, result: CheckResult) -> CheckResult {
        if let CheckResult::Invalid(msg) = &result {
            #[cfg(feature = "tracing")]
            tracing::trace!(explanation = %msg, "check failed");
            self.check_msgs.push(msg.as_str());
        }
        result
    }
}

/// Positional arguments handed to a bound check.
///
/// Optional arguments that are missing or `Undefined` take their default.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Args<'a> {
    function: &'static str,
    args: &'a [Value],
}

impl<'a> Args<'a> {
    pub(crate) fn new(function: &'static str, args: &'a [Value]) -> Self {
        Args { function, args }
    }

    fn present(&self, index: usize) -> Option<&'a Value> {
        self.args.get(index).filter(|v| !v.is_undefined())
    }

    /// The checked value. A missing value is `Undefined`.
    pub(crate) fn value(&self) -> Value {
        self.args.first().cloned().unwrap_or_default()
    }

    pub(crate) fn string(&self, index: usize, name: &str) -> Result<&'a str, Fault> {
        match self.present(index) {
            None => Ok(""),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(Fault::argument_kind(
                self.function,
                name,
                not_kind(other, Kind::String),
            )),
        }
    }

    pub(crate) fn number(&self, index: usize, name: &str, default: f64) -> Result<f64, Fault> {
        match self.present(index) {
            None => Ok(default),
            Some(Value::Number(n)) => Ok(*n),
            Some(other) => Err(Fault::argument_kind(
                self.function,
                name,
                not_kind(other, Kind::Number),
            )),
        }
    }
}

/// `"is 1.5"`-style wording for numbers inside faults.
pub(crate) fn is_number(n: f64) -> String {
    format!("is {}", format_number(n))
}

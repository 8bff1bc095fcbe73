//! Check results and faults
//!
//! Two separate things can come out of a check:
//!
//! - a [`CheckResult`], which is data about the checked value, and
//! - a [`Fault`], which means the check itself was called incorrectly.
//!
//! A check never turns an invalid value into a `Fault`, and never reports
//! misuse through a `CheckResult`.

use std::error::Error as StdError;
use std::fmt;

use crate::Value;

/// The verdict of a single check.
///
/// # Example
///
/// ```rust
/// use bad_checks::CheckResult;
///
/// let ok = CheckResult::Valid;
/// let bad = CheckResult::Invalid("run(): n is null not type 'boolean'".to_string());
///
/// assert!(ok.is_valid());
/// assert_eq!(bad.explanation(), Some("run(): n is null not type 'boolean'"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CheckResult {
    /// The value passed.
    #[default]
    Valid,
    /// The value failed, with a human readable explanation.
    Invalid(String),
}

impl CheckResult {
    /// Returns true if the value passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, CheckResult::Valid)
    }

    /// Returns true if the value failed.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, CheckResult::Invalid(_))
    }

    /// The explanation, if the value failed.
    pub fn explanation(&self) -> Option<&str> {
        match self {
            CheckResult::Valid => None,
            CheckResult::Invalid(msg) => Some(msg),
        }
    }

    /// Consume and return the explanation, if the value failed.
    pub fn into_explanation(self) -> Option<String> {
        match self {
            CheckResult::Valid => None,
            CheckResult::Invalid(msg) => Some(msg),
        }
    }

    /// Convert into a `Result`, with the explanation as the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bad_checks::CheckResult;
    ///
    /// assert_eq!(CheckResult::Valid.into_result(), Ok(()));
    /// assert_eq!(
    ///     CheckResult::Invalid("nope".into()).into_result(),
    ///     Err("nope".to_string())
    /// );
    /// ```
    pub fn into_result(self) -> Result<(), String> {
        match self {
            CheckResult::Valid => Ok(()),
            CheckResult::Invalid(msg) => Err(msg),
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CheckResult::Invalid(msg.into())
    }
}

impl From<Option<String>> for CheckResult {
    fn from(explanation: Option<String>) -> Self {
        explanation.map_or(CheckResult::Valid, CheckResult::Invalid)
    }
}

/// The `string | false` shape: `Valid` becomes `false`, `Invalid` its string.
impl From<CheckResult> for Value {
    fn from(result: CheckResult) -> Self {
        match result {
            CheckResult::Valid => Value::Boolean(false),
            CheckResult::Invalid(msg) => Value::String(msg),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Valid => f.write_str("false"),
            CheckResult::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Misuse of the API itself.
///
/// A fault aborts the call before anything is appended to the message list.
///
/// # Example
///
/// ```rust
/// use bad_checks::{is_bad_string, Value};
///
/// let err = is_bad_string(&Value::Null, &Value::from(vec![]), &Value::from("x"), "")
///     .unwrap_err();
/// assert_eq!(err.to_string(), "Error: is_bad_string(): msg_prefix is null not type 'string'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// An argument has the wrong kind.
    ArgumentKind {
        /// The function that was misused, without parentheses.
        function: &'static str,
        /// The argument, e.g. `msg_prefix` or `check_msgs[2]`.
        argument: String,
        /// What is wrong with it, e.g. `is null not type 'string'`.
        reason: String,
    },
}

impl Fault {
    pub(crate) fn argument_kind(
        function: &'static str,
        argument: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let fault = Fault::ArgumentKind {
            function,
            argument: argument.into(),
            reason: reason.into(),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(fault = %fault, "argument fault");
        fault
    }

    /// The function that was misused.
    pub fn function(&self) -> &'static str {
        match self {
            Fault::ArgumentKind { function, .. } => function,
        }
    }

    /// The offending argument.
    pub fn argument(&self) -> &str {
        match self {
            Fault::ArgumentKind { argument, .. } => argument,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::ArgumentKind {
                function,
                argument,
                reason,
            } => write!(f, "Error: {}(): {} {}", function, argument, reason),
        }
    }
}

impl StdError for Fault {}

//! Integer check
//!
//! An integer here is a finite [`Value::Number`] with no fractional part.
//! On top of that, [`IntegerBounds`] can require an inclusive range and a
//! divisor. The explanation always names the first constraint that failed,
//! checked in this order: type, integral, minimum, maximum, divisor.

use super::args::{is_number, Args, Session};
use crate::bind::BadCheck;
use crate::primitives::identify;
use crate::value::format_number;
use crate::{is_bad_type, CheckResult, Fault, Kind, Value};

const FUNCTION: &str = "is_bad_integer";

/// Constraints for [`is_bad_integer`].
///
/// # Example
///
/// ```rust
/// use bad_checks::IntegerBounds;
///
/// let bounds = IntegerBounds::new().identifier("port").min(1.0).max(65535.0);
/// assert_eq!(bounds.divisible_by, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerBounds {
    /// What to call the value in explanations.
    pub identifier: String,
    /// Smallest allowed value, inclusive.
    pub min: f64,
    /// Largest allowed value, inclusive.
    pub max: f64,
    /// The value must leave no remainder when divided by this.
    pub divisible_by: f64,
}

impl Default for IntegerBounds {
    fn default() -> Self {
        IntegerBounds {
            identifier: String::new(),
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            divisible_by: 1.0,
        }
    }
}

impl IntegerBounds {
    /// No range and a divisor of 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Set the inclusive minimum.
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Set the inclusive maximum.
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set the required divisor.
    pub fn divisible_by(mut self, divisible_by: f64) -> Self {
        self.divisible_by = divisible_by;
        self
    }

    fn validate(&self) -> Result<(), Fault> {
        if self.min.is_nan() {
            return Err(Fault::argument_kind(FUNCTION, "min", is_number(self.min)));
        }
        if self.max.is_nan() {
            return Err(Fault::argument_kind(FUNCTION, "max", is_number(self.max)));
        }
        if self.min > self.max {
            return Err(Fault::argument_kind(
                FUNCTION,
                "min",
                format!(
                    "{} which is greater than max {}",
                    is_number(self.min),
                    format_number(self.max)
                ),
            ));
        }
        if !self.divisible_by.is_finite() || self.divisible_by == 0.0 {
            return Err(Fault::argument_kind(
                FUNCTION,
                "divisible_by",
                format!("{} not a finite non-zero number", is_number(self.divisible_by)),
            ));
        }
        Ok(())
    }

    fn explain(&self, msg_prefix: &str, value: &Value) -> CheckResult {
        let n = match value {
            Value::Number(n) => *n,
            other => return is_bad_type(msg_prefix, other, &self.identifier, Kind::Number),
        };
        let id = identify(&self.identifier);
        let shown = format_number(n);

        if !n.is_finite() || n.fract() != 0.0 {
            CheckResult::invalid(format!("{}: {} is {} not an integer", msg_prefix, id, shown))
        } else if n < self.min {
            CheckResult::invalid(format!(
                "{}: {} is {} which is less than the minimum {}",
                msg_prefix,
                id,
                shown,
                format_number(self.min)
            ))
        } else if n > self.max {
            CheckResult::invalid(format!(
                "{}: {} is {} which is greater than the maximum {}",
                msg_prefix,
                id,
                shown,
                format_number(self.max)
            ))
        } else if n % self.divisible_by != 0.0 {
            CheckResult::invalid(format!(
                "{}: {} is {} which is not divisible by {}",
                msg_prefix,
                id,
                shown,
                format_number(self.divisible_by)
            ))
        } else {
            CheckResult::Valid
        }
    }
}

/// Validate an integer.
///
/// Faults on a bad `msg_prefix` or `check_msgs`, and on bounds that cannot
/// be satisfied sensibly (`NaN` limits, `min > max`, a zero or non-finite
/// divisor). Faults never append to `check_msgs`.
///
/// # Example
///
/// ```rust
/// use bad_checks::{is_bad_integer, Array, CheckResult, IntegerBounds, Value};
///
/// let msgs = Value::from(Array::new());
/// let bounds = IntegerBounds::new().identifier("n").min(0.0).max(10.0);
///
/// assert_eq!(is_bad_integer(&"p".into(), &msgs, &7.into(), &bounds).unwrap(), CheckResult::Valid);
/// assert_eq!(
///     is_bad_integer(&"p".into(), &msgs, &11.into(), &bounds).unwrap().explanation(),
///     Some("p: n is 11 which is greater than the maximum 10")
/// );
/// assert_eq!(
///     is_bad_integer(&"p".into(), &msgs, &3.into(), &bounds.divisible_by(2.0))
///         .unwrap()
///         .explanation(),
///     Some("p: n is 3 which is not divisible by 2")
/// );
/// ```
pub fn is_bad_integer(
    msg_prefix: &Value,
    check_msgs: &Value,
    value: &Value,
    bounds: &IntegerBounds,
) -> Result<CheckResult, Fault> {
    let session = Session::open(FUNCTION, msg_prefix, check_msgs)?;
    bounds.validate()?;
    Ok(session.record(bounds.explain(session.prefix, value)))
}

/// [`is_bad_integer`] in binder form, taking
/// `(value, identifier?, min?, max?, divisible_by?)`.
pub fn bad_check() -> BadCheck {
    BadCheck::new(FUNCTION, |msg_prefix, check_msgs, args| {
        let session = Session::open(FUNCTION, msg_prefix, check_msgs)?;
        let args = Args::new(FUNCTION, args);
        let bounds = IntegerBounds {
            identifier: args.string(1, "identifier")?.to_string(),
            min: args.number(2, "min", f64::NEG_INFINITY)?,
            max: args.number(3, "max", f64::INFINITY)?,
            divisible_by: args.number(4, "divisible_by", 1.0)?,
        };
        bounds.validate()?;
        Ok(session.record(bounds.explain(session.prefix, &args.value())))
    })
}

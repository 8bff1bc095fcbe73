//! Dynamic values
//!
//! Checks inspect arguments whose type is only known at runtime, such as
//! tool-call payloads or values handed over by a scripting host. [`Value`]
//! is the closed model of such arguments and [`Value::kind`] is the one place
//! that classifies them.
//!
//! # Example
//!
//! ```rust
//! use bad_checks::{Kind, Value};
//!
//! let values = vec![Value::Undefined, Value::Null, Value::from(1.5), Value::from(vec![])];
//! let kinds: Vec<Kind> = values.iter().map(Value::kind).collect();
//!
//! assert_eq!(kinds, vec![Kind::Undefined, Kind::Object, Kind::Number, Kind::Object]);
//! ```

mod array;
mod kind;

#[cfg(feature = "serde")]
mod serde_impl;

use std::collections::BTreeMap;

pub use array::Array;
pub use kind::Kind;

use crate::bind::BadCheck;

/// A dynamically typed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Missing. Distinct from `Null`.
    #[default]
    Undefined,
    /// The null sentinel.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double precision number.
    Number(f64),
    /// An arbitrary precision integer.
    BigInt(i128),
    /// A string.
    String(String),
    /// A symbol with an optional description.
    Symbol(Option<String>),
    /// A callable check.
    Function(BadCheck),
    /// A record of named fields.
    Object(BTreeMap<String, Value>),
    /// A shared array.
    Array(Array),
}

impl Value {
    /// Classify this value.
    ///
    /// `Null`, `Object` and `Array` all report [`Kind::Object`].
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Boolean(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Function(_) => Kind::Function,
            Value::Null | Value::Object(_) | Value::Array(_) => Kind::Object,
        }
    }

    /// Returns true for `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true for `Null` only, not for `Undefined`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for arrays.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Get as boolean if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the array handle if this is an `Array`.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get the check if this is a `Function`.
    pub fn as_function(&self) -> Option<&BadCheck> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }
}

/// Render a number the way explanations print it.
///
/// Integral values have no fractional part; `NaN` and the infinities are
/// spelled out.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    // Large magnitudes round, as they would in any double based host.
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(Array::from(values))
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Object(fields)
    }
}

impl From<BadCheck> for Value {
    fn from(check: BadCheck) -> Self {
        Value::Function(check)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks;

    #[test]
    fn test_kind_of_every_variant() {
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
        assert_eq!(Value::Null.kind(), Kind::Object);
        assert_eq!(Value::Boolean(false).kind(), Kind::Boolean);
        assert_eq!(Value::Number(f64::NAN).kind(), Kind::Number);
        assert_eq!(Value::BigInt(5).kind(), Kind::BigInt);
        assert_eq!(Value::from("").kind(), Kind::String);
        assert_eq!(Value::Symbol(None).kind(), Kind::Symbol);
        assert_eq!(Value::from(checks::boolean()).kind(), Kind::Function);
        assert_eq!(Value::Object(BTreeMap::new()).kind(), Kind::Object);
        assert_eq!(Value::from(vec![]).kind(), Kind::Object);
    }

    #[test]
    fn test_null_is_not_undefined() {
        assert!(Value::Null.is_null());
        assert!(!Value::Undefined.is_null());
        assert!(Value::Undefined.is_undefined());
        assert_eq!(Value::default(), Value::Undefined);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(11.0), "11");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(2).as_number(), Some(2.0));
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert!(Value::from(vec![]).as_array().is_some());
        assert!(Value::Null.as_array().is_none());
        assert!(Value::from(checks::string()).as_function().is_some());
    }
}

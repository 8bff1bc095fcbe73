//! Native type classification
//!
//! [`Kind`] is the closed set of type names that explanations talk about.
//! It follows the classic `typeof` rules of dynamic hosts: `null`, records
//! and arrays all classify as `object`. The checks that need to tell those
//! three apart do so by matching on [`Value`](crate::Value) directly.

use std::fmt;

/// The runtime kind of a [`Value`](crate::Value).
///
/// # Example
///
/// ```rust
/// use bad_checks::{Kind, Value};
///
/// assert_eq!(Value::Null.kind(), Kind::Object);
/// assert_eq!(Value::from("abc").kind(), Kind::String);
/// assert_eq!(Kind::BigInt.to_string(), "bigint");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// A missing value.
    Undefined,
    /// `true` or `false`.
    Boolean,
    /// A double precision float, including `NaN` and the infinities.
    Number,
    /// An arbitrary precision integer.
    BigInt,
    /// A UTF-8 string.
    String,
    /// A unique symbol.
    Symbol,
    /// Anything callable.
    Function,
    /// Records, arrays and `null`.
    Object,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 8] = [
        Kind::Undefined,
        Kind::Boolean,
        Kind::Number,
        Kind::BigInt,
        Kind::String,
        Kind::Symbol,
        Kind::Function,
        Kind::Object,
    ];

    /// The lowercase name used in explanations.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::BigInt => "bigint",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Function => "function",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

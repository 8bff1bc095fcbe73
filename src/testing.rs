//! Testing utilities for code that uses bad-checks
//!
//! Assertion macros for [`CheckResult`](crate::CheckResult)s and
//! [`Fault`](crate::Fault)s, and with the `proptest` feature, strategies for
//! generating [`Value`](crate::Value)s and [`Kind`](crate::Kind)s.
//!
//! # Example
//!
//! ```rust
//! use bad_checks::{assert_fault, assert_invalid, assert_valid, is_bad_string, Array, Value};
//!
//! let msgs = Value::from(Array::new());
//!
//! assert_valid!(is_bad_string(&"p".into(), &msgs, &"ok".into(), "s").unwrap());
//! assert_invalid!(
//!     is_bad_string(&"p".into(), &msgs, &Value::Null, "s").unwrap(),
//!     "p: s is null not type 'string'"
//! );
//! assert_fault!(
//!     is_bad_string(&Value::Null, &msgs, &"ok".into(), "s"),
//!     "Error: is_bad_string(): msg_prefix is null not type 'string'"
//! );
//! ```

/// Assert that a check result is `Valid`.
///
/// # Example
///
/// ```rust
/// use bad_checks::{assert_valid, CheckResult};
///
/// assert_valid!(CheckResult::Valid);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            $crate::CheckResult::Valid => {}
            $crate::CheckResult::Invalid(msg) => {
                panic!("Expected Valid, got Invalid: {:?}", msg);
            }
        }
    };
}

/// Assert that a check result is `Invalid`, optionally with a given
/// explanation.
///
/// # Example
///
/// ```rust
/// use bad_checks::{assert_invalid, CheckResult};
///
/// let bad = CheckResult::Invalid("p: nope".to_string());
/// assert_invalid!(bad.clone());
/// assert_invalid!(bad, "p: nope");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        match $result {
            $crate::CheckResult::Invalid(_) => {}
            $crate::CheckResult::Valid => {
                panic!("Expected Invalid, got Valid");
            }
        }
    };
    ($result:expr, $expected:expr) => {
        match $result {
            $crate::CheckResult::Invalid(msg) => {
                assert_eq!(msg, $expected);
            }
            $crate::CheckResult::Valid => {
                panic!("Expected Invalid with explanation {:?}, got Valid", $expected);
            }
        }
    };
}

/// Assert that a call faults with the given message.
///
/// # Example
///
/// ```rust
/// use bad_checks::{assert_fault, bind_bad_checks, Value};
///
/// assert_fault!(
///     bind_bad_checks(&Value::Null, []),
///     "Error: bind_bad_checks(): msg_prefix is null not 'string'"
/// );
/// ```
#[macro_export]
macro_rules! assert_fault {
    ($call:expr, $expected:expr) => {
        match $call {
            Err(fault) => {
                assert_eq!(fault.to_string(), $expected);
            }
            Ok(result) => {
                panic!("Expected Fault {:?}, got Ok: {:?}", $expected, result);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Array, Kind, Value};

#[cfg(feature = "proptest")]
impl Arbitrary for Kind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(Kind::ALL.to_vec()).boxed()
    }
}

/// Strategy for any [`Value`] except functions, nesting arrays and
/// records up to three levels deep.
#[cfg(feature = "proptest")]
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<f64>().prop_map(Value::Number),
        any::<i64>().prop_map(|n| Value::BigInt(i128::from(n))),
        ".{0,12}".prop_map(Value::String),
        proptest::option::of("[a-z]{0,8}").prop_map(Value::Symbol),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4)
                .prop_map(|items: Vec<Value>| Value::Array(Array::from(items))),
            proptest::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

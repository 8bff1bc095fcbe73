//! # bad-checks
//!
//! Runtime argument checks that explain what is wrong.
//!
//! A check looks at one dynamically typed [`Value`] and returns
//! [`CheckResult::Valid`], or [`CheckResult::Invalid`] with a human readable
//! explanation such as `"resize(): width is null not type 'number'"`.
//! Explanations are data, not errors: they are returned and also appended to
//! a caller supplied message list, so a function can run all of its checks
//! and report every problem at once.
//!
//! Misusing a check itself (a prefix that is not a string, a message list
//! that is not an array of strings) is a [`Fault`] and stops the call.
//!
//! ## Quick Example
//!
//! ```rust
//! use bad_checks::{bind_bad_checks, checks, Value};
//!
//! let (msgs, [is_bad_integer, is_bad_boolean]) = bind_bad_checks(
//!     &"resize()".into(),
//!     [checks::integer().into(), checks::boolean().into()],
//! )
//! .unwrap();
//!
//! is_bad_integer.call(&[Value::from(1.5), "width".into(), 0.into()]).unwrap();
//! is_bad_boolean.call(&[Value::from(true), "keep_ratio".into()]).unwrap();
//!
//! assert_eq!(msgs.strings(), vec!["resize(): width is 1.5 not an integer".to_string()]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: log faults and binding sessions through `tracing`
//! - `serde`: `Serialize`/`Deserialize` for [`Value`]
//! - `proptest`: strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bind;
pub mod checks;
pub mod outcome;
pub mod primitives;
pub mod testing;
pub mod value;

// Re-exports
pub use bind::{bind_bad_checks, bind_bad_checks_vec, BadCheck, BoundCheck};
pub use checks::{
    is_bad_boolean, is_bad_integer, is_bad_string, is_bad_string_array, IntegerBounds,
};
pub use outcome::{CheckResult, Fault};
pub use primitives::{is_bad_array, is_bad_null, is_bad_type};
pub use value::{Array, Kind, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bind::{bind_bad_checks, bind_bad_checks_vec, BadCheck, BoundCheck};
    pub use crate::checks::{
        is_bad_boolean, is_bad_integer, is_bad_string, is_bad_string_array, IntegerBounds,
    };
    pub use crate::outcome::{CheckResult, Fault};
    pub use crate::value::{Array, Kind, Value};
}

//! Composed checks
//!
//! Every check here validates its own arguments before looking at the value:
//!
//! 1. `msg_prefix` must be a string,
//! 2. `check_msgs` must be an array holding only strings.
//!
//! Either failing is a [`Fault`](crate::Fault) and nothing is appended.
//! Otherwise the value is checked, and an explanation is appended to
//! `check_msgs` and returned if it is invalid.
//!
//! Each check comes in two forms: a typed function such as
//! [`is_bad_boolean`], and a [`BadCheck`](crate::BadCheck) constructor such
//! as [`boolean()`] for use with [`bind_bad_checks`](crate::bind_bad_checks).
//!
//! # Example
//!
//! ```rust
//! use bad_checks::{checks, Array, Value};
//!
//! let msgs = Array::new();
//! let result = checks::string()
//!     .call(&"greet()".into(), &msgs.clone().into(), &[Value::from(5), "name".into()])
//!     .unwrap();
//!
//! assert_eq!(result.explanation(), Some("greet(): name is type 'number' not 'string'"));
//! assert_eq!(msgs.len(), 1);
//! ```

mod args;
mod boolean;
mod integer;
mod string;
mod string_array;

pub use boolean::{bad_check as boolean, is_bad_boolean};
pub use integer::{bad_check as integer, is_bad_integer, IntegerBounds};
pub use string::{bad_check as string, is_bad_string};
pub use string_array::{bad_check as string_array, is_bad_string_array};

//! Shared array handle
//!
//! Arrays have reference semantics: cloning an [`Array`] hands out another
//! handle to the same storage. The binder relies on this to give every bound
//! check, and the caller, the same message list.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use super::Value;

/// A growable sequence of [`Value`]s, shared by handle.
///
/// # Example
///
/// ```rust
/// use bad_checks::{Array, Value};
///
/// let msgs = Array::new();
/// let shared = msgs.clone();
/// shared.push("first");
///
/// assert_eq!(msgs.len(), 1);
/// assert_eq!(msgs.get(0), Some(Value::from("first")));
/// assert!(msgs.ptr_eq(&shared));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    /// Create a new, empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Clone out the element at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Borrow the elements.
    ///
    /// The borrow must be released before anything pushes to this array.
    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    /// Snapshot of the current elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// The string elements, in order. Non-string elements are skipped.
    pub fn strings(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect()
    }

    /// Returns true if both handles point at the same storage.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(Rc::new(RefCell::new(values)))
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_storage() {
        let a = Array::new();
        let b = a.clone();
        b.push(1.0);
        b.push("two");
        assert_eq!(a.len(), 2);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_equal_contents_are_not_the_same_array() {
        let a = Array::from(vec![Value::from("x")]);
        let b = Array::from(vec![Value::from("x")]);
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_strings_skips_other_kinds() {
        let a: Array = vec![Value::from("a"), Value::Null, Value::from("b")]
            .into_iter()
            .collect();
        assert_eq!(a.strings(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_debug_lists_elements() {
        let a = Array::from(vec![Value::Boolean(true)]);
        assert_eq!(format!("{:?}", a), "[Boolean(true)]");
    }
}

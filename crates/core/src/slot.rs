//! Storage handles shared between a caller and its registered parameter.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// A handle to one storage cell.
///
/// Registration creates the cell, keeps one handle inside the parameter and
/// hands the other back to the caller. Values written by the environment
/// fallback or by the command-line parser are visible through either handle.
pub struct Slot<T>(Rc<RefCell<T>>);

impl<T> Slot<T> {
    pub(crate) fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Borrows the current value.
    ///
    /// # Panics
    ///
    /// Panics if the value is being written at the same time.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    pub(crate) fn replace(&self, value: T) -> T {
        self.0.replace(value)
    }
}

impl<T: Clone> Slot<T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

// Not derived: cloning the handle must not require `T: Clone`.
impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Debug> Debug for Slot<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("Slot").field(&*self.0.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_storage() {
        let slot = Slot::new(1_i64);
        let other = slot.clone();

        *other.borrow_mut() = 7;

        assert_eq!(slot.get(), 7);
    }

    #[test]
    fn test_replace_returns_previous() {
        let slot = Slot::new(vec![1_i64]);
        let previous = slot.replace(vec![2, 3]);

        assert_eq!(previous, vec![1]);
        assert_eq!(*slot.borrow(), vec![2, 3]);
    }

    #[test]
    fn test_debug_formatting() {
        let slot = Slot::new("a".to_string());
        assert_eq!(format!("{slot:?}"), "Slot(\"a\")");
    }
}

//! Access to shared view state from async drivers.
//!
//! DESIGN
//! ======
//! Drivers never hold a borrow across an `.await`: every read or write is a
//! closure applied to the current value. `None` means the owning view has been
//! torn down, which drivers treat the same as a superseded result.

use std::cell::RefCell;
use std::rc::Rc;

/// A handle to a piece of mutable state shared by the UI and async drivers.
pub trait StateCell<T> {
    /// Apply `f` to the current value, returning its result.
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the current value through `f`.
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut value = self.try_borrow_mut().ok()?;
        Some(f(&mut value))
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let value = self.try_borrow().ok()?;
        Some(f(&value))
    }
}

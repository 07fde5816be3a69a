//! Test-only helper observing element drops.

use std::cell::RefCell;
use std::rc::Rc;

/// Records the values of every [`Tracked`] wrapper dropped so far.
pub struct DropTracker<T> {
    log: Rc<RefCell<Vec<T>>>,
}

impl<T: Clone> DropTracker<T> {
    pub fn new() -> Self {
        DropTracker {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Wraps a value so its drop is recorded by this tracker.
    pub fn wrap(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            log: Rc::clone(&self.log),
        }
    }

    /// Wraps every value of an iterator.
    pub fn wrap_iter<'a, I>(&'a self, values: I) -> impl Iterator<Item = Tracked<T>> + 'a
    where
        I: IntoIterator<Item = T>,
        <I as IntoIterator>::IntoIter: 'a,
    {
        values.into_iter().map(|value| self.wrap(value))
    }

    /// Drains and returns the values dropped since the last call.
    pub fn take(&self) -> Vec<T> {
        self.log.borrow_mut().drain(..).collect()
    }
}

/// A value whose drop reports back to its [`DropTracker`].
#[derive(Clone, Debug)]
pub struct Tracked<T: Clone> {
    value: T,
    log: Rc<RefCell<Vec<T>>>,
}

impl<T: Clone> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.value.clone());
    }
}

impl<T: Clone + PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Clone + Eq> Eq for Tracked<T> {}

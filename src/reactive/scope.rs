//! Ownership of runtime slots.
//!
//! A [`Scope`] remembers the props and watchers created on behalf of one
//! owner. [`Scope::stop`] detaches the watchers and leaves the props readable;
//! dropping the scope frees everything it still holds.

use std::cell::RefCell;

use super::derived::Derived;
use super::prop::{release, stop_watch, Prop, PropId, WatchId};

#[derive(Debug, Default)]
pub struct Scope {
    props: RefCell<Vec<PropId>>,
    watchers: RefCell<Vec<WatchId>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `prop`; it is freed with the scope.
    pub fn own_prop<T: 'static>(&self, prop: Prop<T>) -> Prop<T> {
        self.props.borrow_mut().push(prop.id());
        prop
    }

    /// Take ownership of a watcher; it is stopped with the scope.
    pub fn own_watch(&self, id: WatchId) -> WatchId {
        self.watchers.borrow_mut().push(id);
        id
    }

    /// Take ownership of a derived value and the watcher feeding it.
    pub fn own_derived<T: 'static>(&self, derived: Derived<T>) -> Derived<T> {
        self.props.borrow_mut().push(derived.value_id());
        self.watchers.borrow_mut().push(derived.watcher());
        derived
    }

    /// Stop every owned watcher. Owned props keep their last values.
    pub fn stop(&self) {
        let watchers = std::mem::take(&mut *self.watchers.borrow_mut());
        for id in watchers {
            stop_watch(id);
        }
    }

    /// Number of owned watchers still running.
    pub fn watcher_count(&self) -> usize {
        self.watchers.borrow().len()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        release(self.props.get_mut(), self.watchers.get_mut());
    }
}

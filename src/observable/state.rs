use std::cell::RefCell;
use std::rc::Rc;

use super::signal::Signal;
use super::subscription::Subscription;

/// Value cell that notifies on change and replays its current value.
///
/// Subscribers receive the current value as soon as they subscribe, then
/// every value set afterwards. Cloning shares the cell.
pub struct State<T> {
    value: Rc<RefCell<T>>,
    changes: Signal<T>,
}

impl<T: Clone + 'static> State<T> {
    pub fn new(initial: T) -> Self {
        Self { value: Rc::new(RefCell::new(initial)), changes: Signal::new() }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store `value` and deliver it to every subscriber
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value.clone();
        self.changes.emit(&value);
    }

    /// Register `listener` and replay the current value to it
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let listener = Rc::new(listener);
        let replay = Rc::clone(&listener);
        let subscription = self.changes.subscribe(move |value| listener(value));
        replay(&self.get());
        subscription
    }

    /// Like [`Signal::subscribe_first`], with the current value considered first.
    ///
    /// When the current value is accepted the listener runs before this returns
    /// and the returned handle is already inactive.
    pub fn subscribe_first<P, F>(&self, accept: P, listener: F) -> Subscription
    where
        P: Fn(&T) -> bool + 'static,
        F: FnOnce(&T) + 'static,
    {
        let current = self.get();
        if accept(&current) {
            listener(&current);
            return Subscription::detached();
        }
        self.changes.subscribe_first(accept, listener)
    }

    pub fn subscriber_count(&self) -> usize {
        self.changes.subscriber_count()
    }
}

impl<T: Clone + Default + 'static> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self { value: Rc::clone(&self.value), changes: self.changes.clone() }
    }
}

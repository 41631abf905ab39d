use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::subscription::Subscription;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Entry<T> {
    id: u64,
    active: Rc<Cell<bool>>,
    listener: Listener<T>,
}

struct Registry<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Registry<T> {
    fn remove(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

struct Shared<T> {
    registry: RefCell<Registry<T>>,
    pending: RefCell<VecDeque<T>>,
    delivering: Cell<bool>,
}

/// Single-threaded publish/subscribe channel.
///
/// Cloning a `Signal` yields another handle to the same listener registry.
/// Each value is delivered to a snapshot of the registry, so listeners may
/// subscribe, unsubscribe or emit from inside a callback. A listener detached
/// while a value is being delivered is skipped for the rest of that delivery.
///
/// A value emitted from inside a listener is queued until the current value
/// has reached every listener, so all listeners observe values in emission
/// order.
pub struct Signal<T> {
    shared: Rc<Shared<T>>,
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(Shared {
                registry: RefCell::new(Registry { next_id: 0, entries: Vec::new() }),
                pending: RefCell::new(VecDeque::new()),
                delivering: Cell::new(false),
            }),
        }
    }

    /// Register `listener` for every value emitted from now on
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = self.allocate_id();
        let active = Rc::new(Cell::new(true));
        self.insert(id, Rc::clone(&active), Rc::new(listener));
        self.subscription(id, active)
    }

    /// Register `listener` for the first value accepted by `accept` only.
    ///
    /// Rejected values are dropped without effect. Once a value is accepted the
    /// listener detaches itself before running, so no later value reaches it.
    pub fn subscribe_first<P, F>(&self, accept: P, listener: F) -> Subscription
    where
        P: Fn(&T) -> bool + 'static,
        F: FnOnce(&T) + 'static,
    {
        let id = self.allocate_id();
        let active = Rc::new(Cell::new(true));
        let pending = RefCell::new(Some(listener));
        let shared = Rc::downgrade(&self.shared);
        let flag = Rc::clone(&active);

        let once = move |value: &T| {
            if !flag.get() || !accept(value) {
                return;
            }
            flag.set(false);
            detach(&shared, id);
            let listener = pending.borrow_mut().take();
            if let Some(listener) = listener {
                listener(value);
            }
        };

        self.insert(id, Rc::clone(&active), Rc::new(once));
        self.subscription(id, active)
    }

    /// Deliver `value` to every registered listener.
    ///
    /// Called from inside a listener of this signal, the value is queued and
    /// delivered once the outer delivery has finished.
    pub fn emit(&self, value: &T) {
        self.shared.pending.borrow_mut().push_back(value.clone());
        if self.shared.delivering.get() {
            return;
        }

        self.shared.delivering.set(true);
        loop {
            let next = self.shared.pending.borrow_mut().pop_front();
            let Some(next) = next else {
                break;
            };
            self.deliver(&next);
        }
        self.shared.delivering.set(false);
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.registry.borrow().entries.len()
    }

    fn deliver(&self, value: &T) {
        let snapshot: Vec<(Rc<Cell<bool>>, Listener<T>)> = self
            .shared
            .registry
            .borrow()
            .entries
            .iter()
            .map(|entry| (Rc::clone(&entry.active), Rc::clone(&entry.listener)))
            .collect();

        for (active, listener) in snapshot {
            if active.get() {
                listener(value);
            }
        }
    }

    fn allocate_id(&self) -> u64 {
        let mut registry = self.shared.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        id
    }

    fn insert(&self, id: u64, active: Rc<Cell<bool>>, listener: Listener<T>) {
        self.shared.registry.borrow_mut().entries.push(Entry { id, active, listener });
    }

    fn subscription(&self, id: u64, active: Rc<Cell<bool>>) -> Subscription {
        let shared = Rc::downgrade(&self.shared);
        Subscription::new(active, move || detach(&shared, id))
    }
}

impl<T: Clone + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self { shared: Rc::clone(&self.shared) }
    }
}

fn detach<T>(shared: &Weak<Shared<T>>, id: u64) {
    if let Some(shared) = shared.upgrade() {
        shared.registry.borrow_mut().remove(id);
    }
}

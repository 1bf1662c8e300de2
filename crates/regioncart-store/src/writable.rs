//! # Writable
//!
//! A value with an ordered list of observers.
//!
//! ## Notification Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subscribe(f)  ──► f(current)            (immediately, once)           │
//! │                                                                         │
//! │  set(v) / update(g)                                                    │
//! │       │                                                                 │
//! │       ├─► value replaced                                               │
//! │       └─► f1(&v), f2(&v), ... fN(&v)     (subscription order)          │
//! │                                                                         │
//! │  Each observer sees every committed value exactly once, before the     │
//! │  mutating call returns.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is one writer: mutation takes `&mut self`, so the borrow checker
//! enforces what a single-threaded host would otherwise rely on.

use std::fmt;

/// Handle returned by [`Writable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn FnMut(&T) + Send>;

/// Observable value holder.
pub struct Writable<T> {
    value: T,
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u64,
}

impl<T> Writable<T> {
    pub fn new(value: T) -> Self {
        Writable {
            value,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and notifies observers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Derives the next value from the current one, then notifies.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value);
        self.set(next);
    }

    /// Registers `observer` and calls it right away with the current value.
    pub fn subscribe(&mut self, mut observer: impl FnMut(&T) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        observer(&self.value);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.value);
        }
    }
}

impl<T: Default> Default for Writable<T> {
    fn default() -> Self {
        Writable::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writable")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

//! A minimal current-value-plus-changes cell.
//!
//! [`Observed<T>`] holds one value and a registry of callbacks. Subscribing
//! runs the callback immediately with the current value, then again on every
//! subsequent `set`/`update`. That replay-on-subscribe behavior is
//! load-bearing: observers attached after the session started must see the
//! state they missed, not wait for the next change.
//!
//! Single logical thread of control: callbacks run synchronously inside the
//! mutating call and must not re-enter the owner of the cell.

/// Handle returned by [`Observed::subscribe`], used to unsubscribe.
pub type SubscriberId = u64;

type Callback<T> = Box<dyn FnMut(&T)>;

pub struct Observed<T> {
    value: T,
    next_id: SubscriberId,
    subscribers: Vec<(SubscriberId, Callback<T>)>,
}

impl<T> Observed<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a callback. It runs once right away with the current value.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&T) + 'static) -> SubscriberId {
        callback(&self.value);
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Drop a subscription. Returns false if the ID was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Replace the value and notify every subscriber.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate the value in place, then notify every subscriber.
    pub fn update(&mut self, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.value);
        self.notify();
    }

    fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
    }
}

//! Observable value holder
//!
//! A `Signal` keeps the latest value and calls every registered observer,
//! synchronously and in registration order, whenever the value changes.
//! New observers are called once with the current value when they subscribe.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Observer callback type
pub type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber<T> {
    id: SubscriptionId,
    callback: Observer<T>,
}

/// Observable value.
///
/// The value is written under a lock and observers run after it is released,
/// so writers racing on different threads may see their notifications
/// delivered out of write order. Keep a single writer per signal.
pub struct Signal<T> {
    value: RwLock<T>,
    subscribers: RwLock<Vec<Subscriber<T>>>,
    next_id: AtomicU64,
}

impl<T> Signal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            subscribers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the value, notifying observers if it changed.
    ///
    /// Returns `true` when observers were notified.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.value.write().unwrap_or_else(PoisonError::into_inner);
            if *current == value {
                return false;
            }
            *current = value.clone();
        }

        self.notify(&value);
        true
    }

    /// Replace the value and notify observers even if it is unchanged
    pub fn publish(&self, value: T) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value.clone();
        self.notify(&value);
    }

    /// Register an observer. It is called immediately with the current value.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let callback: Observer<T> = Arc::new(observer);

        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Subscriber {
                id,
                callback: callback.clone(),
            });

        debug!("Registered signal observer {:?}", id);

        callback(&self.get());
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        before != subscribers.len()
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    // Runs without any lock held so observers may read or subscribe.
    fn notify(&self, value: &T) {
        let callbacks: Vec<Observer<T>> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|s| s.callback.clone())
            .collect();

        for callback in callbacks {
            callback(value);
        }
    }
}

impl<T> Default for Signal<T>
where
    T: Clone + PartialEq + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

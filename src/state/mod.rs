//! Session state holder
//!
//! Holds the authenticated [`Principal`] for the lifetime of the process.
//! Login and logout are the only writers; everything else reads. One instance
//! is created at startup and shared by `Arc` with every consumer.

pub mod signal;

use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

use crate::models::Principal;
pub use signal::{Signal, SubscriptionId};

pub struct SessionState {
    principal: RwLock<Option<Principal>>,
    logged_in: Signal<bool>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Create a logged-out state
    pub fn new() -> Self {
        Self {
            principal: RwLock::new(None),
            logged_in: Signal::new(false),
        }
    }

    /// Create a logged-out state ready for sharing
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Store the principal and flip the logged-in flag to true.
    ///
    /// Observers are notified on every call, so logging in over an existing
    /// principal still reaches them.
    pub fn log_in(&self, principal: Principal) {
        info!("User {} logged in (admin: {})", principal.id, principal.admin);
        *self.principal.write().unwrap_or_else(PoisonError::into_inner) = Some(principal);
        self.logged_in.publish(true);
    }

    /// Clear the principal and flip the logged-in flag to false
    pub fn log_out(&self) {
        let previous = self
            .principal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(principal) = previous {
            info!("User {} logged out", principal.id);
        }
        self.logged_in.set(false);
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    /// Current principal, if any
    pub fn principal(&self) -> Option<Principal> {
        self.principal
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// ID of the logged-in user
    pub fn user_id(&self) -> Option<i64> {
        self.principal().map(|p| p.id)
    }

    /// `false` when logged out
    pub fn is_admin(&self) -> bool {
        self.principal().map_or(false, |p| p.admin)
    }

    /// `Authorization` header value for the logged-in principal
    pub fn authorization(&self) -> Option<String> {
        self.principal().map(|p| p.authorization())
    }

    /// Observe the logged-in flag; the observer gets the current value right away.
    pub fn subscribe_logged_in<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        self.logged_in.subscribe(observer)
    }

    pub fn unsubscribe_logged_in(&self, id: SubscriptionId) -> bool {
        self.logged_in.unsubscribe(id)
    }
}

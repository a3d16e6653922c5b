//! Navigation guards
//!
//! Guards decide synchronously, from the session state alone, whether a route
//! may be activated. No network call is involved.

use tracing::debug;

use super::Route;
use crate::state::SessionState;

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Cancel the navigation and go here instead
    Redirect(Route),
}

pub trait Guard: Send + Sync {
    fn can_activate(&self, state: &SessionState, route: &Route) -> GuardDecision;
}

/// Sends logged-out users asking for a protected view to the login view
pub struct AuthGuard;

impl Guard for AuthGuard {
    fn can_activate(&self, state: &SessionState, route: &Route) -> GuardDecision {
        if route.requires_auth() && !state.is_logged_in() {
            debug!("AuthGuard blocked {}", route);
            return GuardDecision::Redirect(Route::Login);
        }
        GuardDecision::Allow
    }
}

/// Keeps logged-in users off the login and register views
pub struct UnauthGuard;

impl Guard for UnauthGuard {
    fn can_activate(&self, state: &SessionState, route: &Route) -> GuardDecision {
        if route.is_guest_only() && state.is_logged_in() {
            debug!("UnauthGuard blocked {}", route);
            return GuardDecision::Redirect(Route::Sessions);
        }
        GuardDecision::Allow
    }
}

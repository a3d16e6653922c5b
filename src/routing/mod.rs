//! Client-side routing
//!
//! Typed routes, path parsing and a navigation history. Every navigation goes
//! through the guards in [`guards`], so a logged-out user asking for a
//! protected view lands on the login view instead.

pub mod guards;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

use crate::state::SessionState;
pub use guards::{AuthGuard, Guard, GuardDecision, UnauthGuard};

/// Text of the not-found view
pub const NOT_FOUND_MESSAGE: &str = "Page not found !";

/// Views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Sessions,
    SessionDetail(i64),
    SessionCreate,
    SessionUpdate(i64),
    Me,
    NotFound,
}

impl Route {
    /// Parse a path such as `/sessions/detail/3`. Unknown paths map to `NotFound`.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["sessions"] => Route::Sessions,
            ["sessions", "create"] => Route::SessionCreate,
            ["sessions", "detail", id] => parse_id(id).map_or(Route::NotFound, Route::SessionDetail),
            ["sessions", "update", id] => parse_id(id).map_or(Route::NotFound, Route::SessionUpdate),
            ["me"] => Route::Me,
            _ => Route::NotFound,
        }
    }

    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Sessions => "/sessions".to_string(),
            Route::SessionDetail(id) => format!("/sessions/detail/{}", id),
            Route::SessionCreate => "/sessions/create".to_string(),
            Route::SessionUpdate(id) => format!("/sessions/update/{}", id),
            Route::Me => "/me".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Views that need a logged-in principal
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Sessions
                | Route::SessionDetail(_)
                | Route::SessionCreate
                | Route::SessionUpdate(_)
                | Route::Me
        )
    }

    /// Views only offered to logged-out visitors
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Navigation history with guard enforcement
pub struct Router {
    state: Arc<SessionState>,
    guards: Vec<Box<dyn Guard>>,
    history: RwLock<Vec<Route>>,
}

impl Router {
    /// Router starting on the home view with the auth and unauth guards installed
    pub fn new(state: Arc<SessionState>) -> Self {
        Self::with_guards(state, vec![Box::new(AuthGuard), Box::new(UnauthGuard)])
    }

    pub fn with_guards(state: Arc<SessionState>, guards: Vec<Box<dyn Guard>>) -> Self {
        Self {
            state,
            guards,
            history: RwLock::new(vec![Route::Home]),
        }
    }

    /// Navigate to a route, following guard redirects.
    ///
    /// Returns the route actually activated.
    pub fn navigate(&self, target: Route) -> Route {
        let resolved = self.resolve(target);
        if resolved != target {
            warn!("Navigation to {} redirected to {}", target, resolved);
        } else {
            info!("Navigating to {}", resolved);
        }

        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(resolved);
        resolved
    }

    /// Navigate to a path, see [`Route::parse`]
    pub fn navigate_path(&self, path: &str) -> Route {
        self.navigate(Route::parse(path))
    }

    /// Go back one step. Stays put when there is no previous entry.
    pub fn back(&self) -> Route {
        let mut history = self.history.write().unwrap_or_else(PoisonError::into_inner);
        if history.len() > 1 {
            history.pop();
        }
        history.last().copied().unwrap_or(Route::Home)
    }

    /// Route currently shown
    pub fn current(&self) -> Route {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
            .unwrap_or(Route::Home)
    }

    /// Every route visited, oldest first
    pub fn history(&self) -> Vec<Route> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn resolve(&self, target: Route) -> Route {
        for guard in &self.guards {
            if let GuardDecision::Redirect(to) = guard.can_activate(&self.state, &target) {
                return to;
            }
        }
        target
    }
}

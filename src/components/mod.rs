//! View models
//!
//! Headless counterparts of the application's screens. Each view holds its
//! own state (form, loaded resources, error flag) and talks to the rest of the
//! application through a shared [`AppContext`].

pub mod app;
pub mod login;
pub mod me;
pub mod notifier;
pub mod register;
pub mod session_detail;
pub mod session_form;
pub mod session_list;

#[cfg(test)]
pub(crate) mod mocks;

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, ApiServices};
use crate::config::Config;
use crate::routing::Router;
use crate::state::SessionState;

pub use app::{AppShell, NavLink};
pub use login::LoginView;
pub use me::MeView;
pub use notifier::{LogNotifier, MemoryNotifier, Notification, Notifier};
pub use register::RegisterView;
pub use session_detail::SessionDetailView;
pub use session_form::{FormMode, SessionFormView};
pub use session_list::{SessionListView, SessionRow};

/// Shown by every view whose last request failed
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Everything a view depends on
#[derive(Clone)]
pub struct AppContext {
    pub state: Arc<SessionState>,
    pub router: Arc<Router>,
    pub api: ApiServices,
    pub notifier: Arc<dyn Notifier>,
    pub config: Arc<Config>,
}

impl AppContext {
    /// Wire up a logged-out context talking to the configured backend
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let state = SessionState::shared();
        let client = ApiClient::new(&config.api, state.clone())?;

        Ok(Self::with_services(
            config,
            state,
            ApiServices::http(client),
            Arc::new(LogNotifier),
        ))
    }

    pub fn with_services(
        config: Config,
        state: Arc<SessionState>,
        api: ApiServices,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            router: Arc::new(Router::new(state.clone())),
            state,
            api,
            notifier,
            config: Arc::new(config),
        }
    }

    /// Show a confirmation for the configured duration
    pub fn notify(&self, message: &str) {
        self.notifier.notify(Notification::new(
            message,
            self.config.ui.notification_duration_ms,
        ));
    }
}

/// Error flag shared by the views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorFlag(bool);

impl ErrorFlag {
    pub fn raise(&mut self) {
        self.0 = true;
    }

    pub fn clear(&mut self) {
        self.0 = false;
    }

    pub fn is_raised(&self) -> bool {
        self.0
    }

    /// The message to display, if any
    pub fn message(&self) -> Option<&'static str> {
        self.0.then_some(GENERIC_ERROR_MESSAGE)
    }
}

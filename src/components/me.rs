//! Account view

use tracing::{info, warn};

use super::{AppContext, ErrorFlag};
use crate::access::AccountControls;
use crate::api::ApiError;
use crate::models::User;
use crate::routing::Route;

pub const ACCOUNT_DELETED_MESSAGE: &str = "Your account has been deleted !";
pub const ADMIN_BADGE: &str = "You are admin";

pub struct MeView {
    ctx: AppContext,
    user: Option<User>,
    error: ErrorFlag,
}

impl MeView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            user: None,
            error: ErrorFlag::default(),
        }
    }

    /// Fetch the logged-in user's account
    pub async fn load(&mut self) {
        let result = match self.ctx.state.user_id() {
            Some(id) => self.ctx.api.users.get_by_id(id).await,
            None => Err(ApiError::NotLoggedIn),
        };

        match result {
            Ok(user) => {
                self.user = Some(user);
                self.error.clear();
            }
            Err(e) => {
                warn!("Failed to load account: {}", e);
                self.error.raise();
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// "First LAST"
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(User::display_name)
    }

    pub fn controls(&self) -> AccountControls {
        AccountControls::for_principal(self.ctx.state.principal().as_ref())
    }

    pub fn admin_badge(&self) -> Option<&'static str> {
        self.controls().admin_badge.then_some(ADMIN_BADGE)
    }

    /// Delete the account, log out and go home.
    ///
    /// Admins are not offered this and get `None` without a request.
    pub async fn delete(&mut self) -> Option<Route> {
        if !self.controls().delete_account {
            return None;
        }
        let id = self.ctx.state.user_id()?;

        match self.ctx.api.users.delete(id).await {
            Ok(()) => {
                info!("Account {} deleted", id);
                self.error.clear();
                self.ctx.notify(ACCOUNT_DELETED_MESSAGE);
                self.ctx.state.log_out();
                Some(self.ctx.router.navigate(Route::Home))
            }
            Err(e) => {
                warn!("Failed to delete account {}: {}", id, e);
                self.error.raise();
                None
            }
        }
    }

    pub fn back(&self) -> Route {
        self.ctx.router.back()
    }

    pub fn on_error(&self) -> bool {
        self.error.is_raised()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.message()
    }
}

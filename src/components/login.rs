//! Login view

use tracing::warn;

use super::{AppContext, ErrorFlag};
use crate::forms::LoginForm;
use crate::routing::Route;

pub struct LoginView {
    ctx: AppContext,
    pub form: LoginForm,
    error: ErrorFlag,
}

impl LoginView {
    pub fn new(ctx: AppContext) -> Self {
        let form = LoginForm::new(&ctx.config.forms);
        Self {
            ctx,
            form,
            error: ErrorFlag::default(),
        }
    }

    /// Submit the form.
    ///
    /// On success the principal is stored and the sessions view shown; the
    /// route reached is returned. Nothing is sent while the form is invalid.
    pub async fn submit(&mut self) -> Option<Route> {
        let request = self.form.to_request()?;

        match self.ctx.api.auth.login(&request).await {
            Ok(principal) => {
                self.error.clear();
                self.ctx.state.log_in(principal);
                Some(self.ctx.router.navigate(Route::Sessions))
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.error.raise();
                None
            }
        }
    }

    pub fn on_error(&self) -> bool {
        self.error.is_raised()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.message()
    }
}

//! Registration view

use tracing::{info, warn};

use super::{AppContext, ErrorFlag};
use crate::forms::RegisterForm;
use crate::routing::Route;

pub struct RegisterView {
    ctx: AppContext,
    pub form: RegisterForm,
    error: ErrorFlag,
}

impl RegisterView {
    pub fn new(ctx: AppContext) -> Self {
        let form = RegisterForm::new(&ctx.config.forms);
        Self {
            ctx,
            form,
            error: ErrorFlag::default(),
        }
    }

    /// Submit the form and show the login view on success
    pub async fn submit(&mut self) -> Option<Route> {
        let request = self.form.to_request()?;

        match self.ctx.api.auth.register(&request).await {
            Ok(()) => {
                info!("Registered {}", request.email);
                self.error.clear();
                Some(self.ctx.router.navigate(Route::Login))
            }
            Err(e) => {
                warn!("Registration failed: {}", e);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mocks::Harness;
    use crate::forms::Form;
    use std::sync::atomic::Ordering;

    fn filled(view: &mut RegisterView) {
        view.form.set_email("yoga@studio.com");
        view.form.set_first_name("Ada");
        view.form.set_last_name("Lovelace");
        view.form.set_password("secret");
    }

    #[tokio::test]
    async fn test_register_then_login_view() {
        let harness = Harness::new();
        let mut view = RegisterView::new(harness.ctx.clone());
        filled(&mut view);

        let route = view.submit().await;

        assert_eq!(route, Some(Route::Login));
        let registered = harness.auth.registered.lock().unwrap().clone();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].first_name, "Ada");
        assert!(!harness.ctx.state.is_logged_in());
    }

    #[tokio::test]
    async fn test_short_first_name_blocks_submit() {
        let harness = Harness::new();
        let mut view = RegisterView::new(harness.ctx.clone());
        filled(&mut view);
        view.form.set_first_name("A");

        assert!(!view.form.submit_enabled());
        assert_eq!(view.submit().await, None);
        assert!(harness.auth.registered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_raises_error() {
        let harness = Harness::new();
        harness.auth.fail.store(true, Ordering::SeqCst);
        let mut view = RegisterView::new(harness.ctx.clone());
        filled(&mut view);

        assert_eq!(view.submit().await, None);

        assert!(view.on_error());
        assert_eq!(view.error_message(), Some("An error occurred"));
        assert_eq!(harness.ctx.router.current(), Route::Home);
    }
}

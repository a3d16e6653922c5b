//! Session create/update view (admins only)

use tracing::{info, warn};

use super::{AppContext, ErrorFlag};
use crate::api::ApiError;
use crate::forms::SessionForm;
use crate::models::Teacher;
use crate::routing::Route;

pub const CREATED_MESSAGE: &str = "Session created !";
pub const UPDATED_MESSAGE: &str = "Session updated !";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i64),
}

pub struct SessionFormView {
    ctx: AppContext,
    mode: FormMode,
    pub form: SessionForm,
    teachers: Vec<Teacher>,
    error: ErrorFlag,
}

impl SessionFormView {
    pub fn new(ctx: AppContext, mode: FormMode) -> Self {
        Self {
            ctx,
            mode,
            form: SessionForm::empty(),
            teachers: Vec::new(),
            error: ErrorFlag::default(),
        }
    }

    /// Prepare the view.
    ///
    /// Non-admins are sent back to the session list right away and `Some`
    /// carries the route they land on. Otherwise the teachers are loaded and,
    /// when updating, the form is filled from the stored session.
    pub async fn init(&mut self) -> Option<Route> {
        if !self.ctx.state.is_admin() {
            info!("Session form refused to a non-admin");
            return Some(self.ctx.router.navigate(Route::Sessions));
        }

        if let Err(e) = self.prepare().await {
            warn!("Failed to prepare session form: {}", e);
            self.error.raise();
        }
        None
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Choices of the teacher picker
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Create or update the session, then go back to the list.
    ///
    /// Only admins may save; anyone else gets `None` without a request.
    pub async fn submit(&mut self) -> Option<Route> {
        if !self.ctx.state.is_admin() {
            warn!("Session form submitted by a non-admin");
            return None;
        }
        let input = self.form.to_input()?;

        let (result, message) = match self.mode {
            FormMode::Create => (self.ctx.api.sessions.create(&input).await, CREATED_MESSAGE),
            FormMode::Update(id) => (
                self.ctx.api.sessions.update(id, &input).await,
                UPDATED_MESSAGE,
            ),
        };

        match result {
            Ok(session) => {
                info!("Saved session {}", session.id);
                self.error.clear();
                self.ctx.notify(message);
                Some(self.ctx.router.navigate(Route::Sessions))
            }
            Err(e) => {
                warn!("Failed to save session: {}", e);
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

    async fn prepare(&mut self) -> Result<(), ApiError> {
        self.teachers = self.ctx.api.teachers.all().await?;
        if let FormMode::Update(id) = self.mode {
            let session = self.ctx.api.sessions.detail(id).await?;
            self.form = SessionForm::from_session(&session);
        }
        Ok(())
    }
}

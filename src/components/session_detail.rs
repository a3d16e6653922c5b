//! Session detail view
//!
//! Shows one session with its teacher and offers the controls the current
//! principal is entitled to. The controls are recomputed from the refetched
//! session after every participation change.

use tracing::warn;

use super::{AppContext, ErrorFlag};
use crate::access::SessionControls;
use crate::api::ApiError;
use crate::models::{Session, Teacher};
use crate::routing::Route;

pub const DELETED_MESSAGE: &str = "Session deleted !";

pub struct SessionDetailView {
    ctx: AppContext,
    session_id: i64,
    session: Option<Session>,
    teacher: Option<Teacher>,
    error: ErrorFlag,
}

impl SessionDetailView {
    pub fn new(ctx: AppContext, session_id: i64) -> Self {
        Self {
            ctx,
            session_id,
            session: None,
            teacher: None,
            error: ErrorFlag::default(),
        }
    }

    /// Fetch the session, then its teacher
    pub async fn load(&mut self) {
        let result = self.fetch().await;
        self.settle("load session", result);
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn teacher(&self) -> Option<&Teacher> {
        self.teacher.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.ctx.state.is_admin()
    }

    /// Whether the current user is on the roster
    pub fn is_participating(&self) -> bool {
        match (self.ctx.state.user_id(), &self.session) {
            (Some(user_id), Some(session)) => session.has_participant(user_id),
            _ => false,
        }
    }

    /// Controls for the loaded session; none before it is loaded
    pub fn controls(&self) -> SessionControls {
        match &self.session {
            Some(session) => {
                SessionControls::for_session(self.ctx.state.principal().as_ref(), session)
            }
            None => SessionControls::default(),
        }
    }

    /// Join the session, then refetch it.
    ///
    /// Nothing is sent unless the participate control is offered.
    pub async fn participate(&mut self) {
        if !self.controls().participate {
            warn!("Participate not offered for session {}", self.session_id);
            return;
        }
        let result = self.toggle_participation(true).await;
        self.settle("participate", result);
    }

    /// Leave the session, then refetch it.
    ///
    /// Nothing is sent unless the unparticipate control is offered.
    pub async fn unparticipate(&mut self) {
        if !self.controls().unparticipate {
            warn!("Unparticipate not offered for session {}", self.session_id);
            return;
        }
        let result = self.toggle_participation(false).await;
        self.settle("unparticipate", result);
    }

    /// Delete the session and go back to the list.
    ///
    /// Only admins are offered this; everyone else gets `None` without a request.
    pub async fn delete(&mut self) -> Option<Route> {
        if !self.controls().delete {
            warn!("Delete not offered for session {}", self.session_id);
            return None;
        }

        match self.ctx.api.sessions.delete(self.session_id).await {
            Ok(()) => {
                self.error.clear();
                self.ctx.notify(DELETED_MESSAGE);
                Some(self.ctx.router.navigate(Route::Sessions))
            }
            Err(e) => {
                warn!("Failed to delete session {}: {}", self.session_id, e);
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

    async fn toggle_participation(&mut self, join: bool) -> Result<(), ApiError> {
        let user_id = self.ctx.state.user_id().ok_or(ApiError::NotLoggedIn)?;
        let sessions = &self.ctx.api.sessions;
        if join {
            sessions.participate(self.session_id, user_id).await?;
        } else {
            sessions.unparticipate(self.session_id, user_id).await?;
        }
        self.fetch().await
    }

    async fn fetch(&mut self) -> Result<(), ApiError> {
        let session = self.ctx.api.sessions.detail(self.session_id).await?;
        let teacher = self.ctx.api.teachers.detail(session.teacher_id).await?;
        self.session = Some(session);
        self.teacher = Some(teacher);
        Ok(())
    }

    fn settle(&mut self, action: &str, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.error.clear(),
            Err(e) => {
                warn!("Failed to {} {}: {}", action, self.session_id, e);
                self.error.raise();
            }
        }
    }
}

//! Session list view

use tracing::warn;

use super::{AppContext, ErrorFlag};
use crate::access::{can_create_session, SessionControls};
use crate::models::Session;
use crate::routing::Route;

/// One line of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    pub session: Session,
    pub controls: SessionControls,
}

impl SessionRow {
    /// Every row links to its detail view
    pub fn detail_route(&self) -> Route {
        Route::SessionDetail(self.session.id)
    }

    /// Edit link, admins only
    pub fn edit_route(&self) -> Option<Route> {
        self.controls
            .edit
            .then_some(Route::SessionUpdate(self.session.id))
    }
}

pub struct SessionListView {
    ctx: AppContext,
    rows: Vec<SessionRow>,
    error: ErrorFlag,
}

impl SessionListView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            rows: Vec::new(),
            error: ErrorFlag::default(),
        }
    }

    /// Fetch every session
    pub async fn load(&mut self) {
        match self.ctx.api.sessions.all().await {
            Ok(sessions) => {
                let principal = self.ctx.state.principal();
                self.rows = sessions
                    .into_iter()
                    .map(|session| SessionRow {
                        controls: SessionControls::for_session(principal.as_ref(), &session),
                        session,
                    })
                    .collect();
                self.error.clear();
            }
            Err(e) => {
                warn!("Failed to load sessions: {}", e);
                self.rows.clear();
                self.error.raise();
            }
        }
    }

    pub fn rows(&self) -> &[SessionRow] {
        &self.rows
    }

    /// Whether the create control is shown
    pub fn can_create(&self) -> bool {
        can_create_session(self.ctx.state.principal().as_ref())
    }

    pub fn open(&self, id: i64) -> Route {
        self.ctx.router.navigate(Route::SessionDetail(id))
    }

    /// Open the create form; `None` when the control is not offered
    pub fn create(&self) -> Option<Route> {
        self.can_create()
            .then(|| self.ctx.router.navigate(Route::SessionCreate))
    }

    /// Open the update form of a listed session; `None` when the control is not offered
    pub fn edit(&self, id: i64) -> Option<Route> {
        let route = self
            .rows
            .iter()
            .find(|row| row.session.id == id)
            .and_then(SessionRow::edit_route)?;
        Some(self.ctx.router.navigate(route))
    }

    pub fn on_error(&self) -> bool {
        self.error.is_raised()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.message()
    }
}

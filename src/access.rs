//! Authorization rules for the session views
//!
//! Which controls a view may offer depends only on the current principal and
//! the resource on screen. Views recompute these after every mutation.
//!
//! - Admins may create, edit and delete sessions, and never participate.
//! - Other users may join or leave a session, never both at once, depending
//!   on whether they are already on its roster.
//! - Without a principal nothing is offered.

use crate::models::{Principal, Session};

/// Controls offered for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionControls {
    pub edit: bool,
    pub delete: bool,
    pub participate: bool,
    pub unparticipate: bool,
}

impl SessionControls {
    /// Compute the controls for a session
    pub fn for_session(principal: Option<&Principal>, session: &Session) -> Self {
        let Some(principal) = principal else {
            return Self::default();
        };

        if principal.is_admin() {
            return Self {
                edit: true,
                delete: true,
                participate: false,
                unparticipate: false,
            };
        }

        let participating = session.has_participant(principal.id);
        Self {
            edit: false,
            delete: false,
            participate: !participating,
            unparticipate: participating,
        }
    }
}

/// Whether the list view offers the create control
pub fn can_create_session(principal: Option<&Principal>) -> bool {
    principal.map_or(false, Principal::is_admin)
}

/// Controls of the account view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountControls {
    /// Show the "You are admin" badge
    pub admin_badge: bool,
    /// Offer deleting one's own account
    pub delete_account: bool,
}

impl AccountControls {
    pub fn for_principal(principal: Option<&Principal>) -> Self {
        match principal {
            Some(p) if p.is_admin() => Self {
                admin_badge: true,
                delete_account: false,
            },
            Some(_) => Self {
                admin_badge: false,
                delete_account: true,
            },
            None => Self::default(),
        }
    }
}

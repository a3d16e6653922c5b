//! Application shell: navigation bar and logout

use super::AppContext;
use crate::routing::Route;

/// Entries of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Sessions,
    Account,
    Logout,
    Login,
    Register,
}

impl NavLink {
    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Sessions => "Sessions",
            NavLink::Account => "Account",
            NavLink::Logout => "Logout",
            NavLink::Login => "Login",
            NavLink::Register => "Register",
        }
    }

    /// Route the link leads to. Logout is an action, not a route.
    pub fn route(&self) -> Option<Route> {
        match self {
            NavLink::Sessions => Some(Route::Sessions),
            NavLink::Account => Some(Route::Me),
            NavLink::Logout => None,
            NavLink::Login => Some(Route::Login),
            NavLink::Register => Some(Route::Register),
        }
    }
}

pub struct AppShell {
    ctx: AppContext,
}

impl AppShell {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn is_logged_in(&self) -> bool {
        self.ctx.state.is_logged_in()
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        if self.is_logged_in() {
            vec![NavLink::Sessions, NavLink::Account, NavLink::Logout]
        } else {
            vec![NavLink::Login, NavLink::Register]
        }
    }

    /// Follow a navigation link; logout logs out and goes home
    pub fn follow(&self, link: NavLink) -> Route {
        match link.route() {
            Some(route) => self.ctx.router.navigate(route),
            None => self.logout(),
        }
    }

    pub fn logout(&self) -> Route {
        self.ctx.state.log_out();
        self.ctx.router.navigate(Route::Home)
    }
}

//! Route table and the guard that keeps anonymous viewers on the entry page.

use std::fmt;

use crate::types::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Entry,
    Dashboard,
    Analytics,
    Crm,
    Gamification,
    Inventory,
    Settings,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Entry,
        Route::Dashboard,
        Route::Analytics,
        Route::Crm,
        Route::Gamification,
        Route::Inventory,
        Route::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Entry => "/",
            Route::Dashboard => "/dashboard",
            Route::Analytics => "/analytics",
            Route::Crm => "/crm",
            Route::Gamification => "/gamification",
            Route::Inventory => "/inventory",
            Route::Settings => "/settings",
        }
    }

    /// Accepts `/crm`, `crm` and `CRM`.
    pub fn from_path(s: &str) -> Option<Self> {
        let wanted = s.trim().trim_start_matches('/').to_ascii_lowercase();
        Route::ALL
            .into_iter()
            .find(|r| r.path().trim_start_matches('/') == wanted)
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Entry)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still restoring; show "Carregando...".
    Loading,
    Redirect(Route),
    Render,
}

/// Protected-page contract: loading indicator, redirect when anonymous,
/// otherwise render.
pub fn guard(user: Option<&User>, loading: bool) -> GuardDecision {
    if loading {
        GuardDecision::Loading
    } else if user.is_none() {
        GuardDecision::Redirect(Route::Entry)
    } else {
        GuardDecision::Render
    }
}

/// Decision for any route. The entry page sends signed-in viewers on to the
/// dashboard.
pub fn resolve(route: Route, user: Option<&User>, loading: bool) -> GuardDecision {
    if route.is_protected() {
        return guard(user, loading);
    }
    match (loading, user) {
        (true, _) => GuardDecision::Loading,
        (false, Some(_)) => GuardDecision::Redirect(Route::Dashboard),
        (false, None) => GuardDecision::Render,
    }
}

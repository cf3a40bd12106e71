use shared_types::Role;

use crate::session::{Session, SessionStatus};

/// What a route demands of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

/// What the guard layout should do for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session not resolved yet; show only a placeholder.
    Loading,
    RedirectToLogin,
    /// Signed in, but the route belongs to another role.
    RedirectHome(Role),
    /// Render the protected content. `None` only for public routes
    /// visited anonymously.
    Render(Option<Role>),
}

impl GuardOutcome {
    /// Path to navigate to, if the outcome is a redirect.
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            GuardOutcome::RedirectToLogin => Some("/login".to_string()),
            GuardOutcome::RedirectHome(role) => Some(role.home_path()),
            _ => None,
        }
    }
}

/// Decide how a route with `access` is handled for `session`.
///
/// Nothing protected renders before resolution completes.
pub fn decide(session: &Session, access: Access) -> GuardOutcome {
    let role = session.role();
    match (session.status, access) {
        (SessionStatus::Unresolved, _) => GuardOutcome::Loading,
        (_, Access::Public) => GuardOutcome::Render(role),
        (SessionStatus::Anonymous, _) => GuardOutcome::RedirectToLogin,
        (SessionStatus::Authenticated, _) => match (role, access) {
            (None, _) => GuardOutcome::RedirectToLogin,
            (Some(own), Access::Role(required)) if own != required => GuardOutcome::RedirectHome(own),
            (Some(own), _) => GuardOutcome::Render(Some(own)),
        },
    }
}

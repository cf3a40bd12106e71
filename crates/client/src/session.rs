use std::sync::Arc;

use shared_types::{AppError, AuthResponse, Identity, Role};

use crate::claims::identity_from_token;
use crate::storage::TokenStore;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Startup, before the persisted token has been inspected.
    Unresolved,
    Authenticated,
    Anonymous,
}

/// Snapshot of who is signed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub status: SessionStatus,
}

impl Session {
    pub const fn unresolved() -> Self {
        Self {
            identity: None,
            status: SessionStatus::Unresolved,
        }
    }

    pub const fn anonymous() -> Self {
        Self {
            identity: None,
            status: SessionStatus::Anonymous,
        }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            status: SessionStatus::Authenticated,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.status != SessionStatus::Unresolved
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }
}

/// Owner of the current [`Session`] and the persisted token behind it.
///
/// Every transition replaces the whole snapshot; callers never see an
/// identity without the matching status.
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// A store in the `Unresolved` state. Nothing is read until [`resolve`](Self::resolve).
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            session: Session::unresolved(),
            tokens,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity.as_ref()
    }

    /// Restore the session from the persisted token.
    ///
    /// Never fails: a missing token means anonymous, and a token whose claims
    /// cannot be read is cleared and also means anonymous.
    pub fn resolve(&mut self) -> &Session {
        self.session = match self.tokens.load() {
            None => {
                tracing::debug!("No persisted token");
                Session::anonymous()
            }
            Some(token) => match identity_from_token(&token) {
                Ok(identity) => {
                    tracing::info!(role = identity.role.as_str(), "Session restored from stored token");
                    Session::authenticated(identity)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable stored token");
                    self.tokens.clear();
                    Session::anonymous()
                }
            },
        };
        &self.session
    }

    /// Persist `token` and become authenticated as `identity`.
    ///
    /// Calling it again with the same arguments leaves the same state.
    pub fn login(&mut self, identity: Identity, token: &str) {
        self.tokens.save(token);
        tracing::info!(role = identity.role.as_str(), "Signed in");
        self.session = Session::authenticated(identity);
    }

    /// Accept a backend auth response. A malformed response leaves the
    /// session untouched.
    pub fn accept(&mut self, response: AuthResponse) -> Result<Role, AppError> {
        let (identity, token) = response.into_credentials()?;
        let role = identity.role;
        self.login(identity, &token);
        Ok(role)
    }

    /// Drop the identity and the persisted token.
    pub fn logout(&mut self) {
        self.tokens.clear();
        if self.session.status == SessionStatus::Authenticated {
            tracing::info!("Signed out");
        }
        self.session = Session::anonymous();
    }
}

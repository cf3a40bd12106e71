use std::sync::Arc;

use client::{ApiClient, Session, SessionStore, TokenStore};
use dioxus::prelude::*;
use shared_types::{AppError, AuthResponse, Identity, Role};

/// Global session context. Wraps the [`SessionStore`] in a signal so every
/// transition re-renders the guard, the nav rail and the views.
#[derive(Clone, Copy)]
pub struct AuthState {
    store: Signal<SessionStore>,
}

impl AuthState {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            store: Signal::new(SessionStore::new(tokens)),
        }
    }

    pub fn session(&self) -> Session {
        self.store.read().session().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.store.read().identity().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.store.read().session().role()
    }

    /// Id of the signed-in user, empty when anonymous.
    pub fn user_id(&self) -> String {
        self.identity().map(|i| i.id).unwrap_or_default()
    }

    pub fn resolve(&mut self) {
        self.store.write().resolve();
    }

    /// Adopt a successful login or registration response.
    pub fn accept(&mut self, response: AuthResponse) -> Result<Role, AppError> {
        self.store.write().accept(response)
    }

    pub fn logout(&mut self) {
        self.store.write().logout();
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

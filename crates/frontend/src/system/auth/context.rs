use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
}

/// Session of the signed-in user.
///
/// Created once by the app root and handed to the screens that call
/// authorized endpoints. The token itself is issued by the sign-in flow and
/// only read here.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    /// Restore the session saved in localStorage
    pub fn restore() -> Self {
        let access_token = storage::get_access_token().filter(|t| !t.trim().is_empty());
        log::info!("Auth session restored: {}", access_token.is_some());
        Self {
            state: RwSignal::new(AuthState { access_token }),
        }
    }

    /// Token for the next request; untracked, read at call time
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn sign_out(&self) {
        log::info!("Signing out");
        storage::clear_tokens();
        self.state.set(AuthState::default());
    }
}

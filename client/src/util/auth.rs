//! Reactive session handle shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `AuthContext`, restores it after hydration, and provides
//! it to the whole view tree. Route guards read it to decide redirects; pages
//! call its operations; `ApiClient` consults it as a `CredentialProvider`.
//!
//! TRADE-OFFS
//! ==========
//! `sign_in` works on a snapshot of the store and commits it only on success.
//! The commit is unconditional: the session belongs to the app, not to the
//! page that started the request, so it must land even if that page is gone.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::credentials::CredentialProvider;
use crate::net::transport::Transport;
use crate::net::types::{Identity, SignInCredentials};
use crate::state::session::{SessionError, SessionStore, StorageKeys};
use crate::util::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
    restored: RwSignal<bool>,
}

impl AuthContext {
    pub fn new(keys: StorageKeys) -> Self {
        Self {
            store: RwSignal::new(SessionStore::new(BrowserStorage, keys)),
            restored: RwSignal::new(false),
        }
    }

    /// Load the persisted session. Call once, on the client.
    pub fn restore(&self) {
        self.store.update(SessionStore::restore);
        self.restored.set(true);
    }

    /// Whether [`AuthContext::restore`] has run; guards wait for it.
    pub fn is_restored(&self) -> bool {
        self.restored.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.store.with(|s| s.identity().cloned())
    }

    /// # Errors
    ///
    /// Returns the remote or persistence failure; the current session is
    /// left untouched in that case.
    pub async fn sign_in<T: Transport>(
        &self,
        api: &ApiClient<T>,
        credentials: &SignInCredentials,
    ) -> Result<(), SessionError> {
        let mut draft = self.store.get_untracked();
        draft.sign_in(api, credentials).await?;
        self.store.set(draft);
        Ok(())
    }

    pub fn sign_out(&self) {
        self.store.update(SessionStore::sign_out);
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotAuthenticated` if nobody is signed in, or a
    /// persistence failure.
    pub fn update_identity(&self, identity: Identity) -> Result<(), SessionError> {
        self.store
            .try_update(|s| s.update_identity(identity))
            .unwrap_or(Err(SessionError::NotAuthenticated))
    }
}

impl CredentialProvider for AuthContext {
    fn bearer_token(&self) -> Option<String> {
        self.store.with_untracked(CredentialProvider::bearer_token)
    }
}

//! Session store: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `util::auth::AuthContext` for the lifetime of the app. The store
//! is plain data plus a storage handle so every transition can be exercised
//! natively; the reactive wrapper only decides when to commit it.
//!
//! INVARIANTS
//! ==========
//! - The token and identity keys are written and cleared as a pair. A failed
//!   second write rolls back the first.
//! - In-memory state changes only after storage agrees with it, so the two
//!   never disagree outside a single transition.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiClient, ApiError};
use crate::net::credentials::CredentialProvider;
use crate::net::transport::Transport;
use crate::net::types::{Identity, Session, SessionPayload, SignInCredentials};
use crate::util::storage::{KeyValueStorage, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("could not encode identity: {0}")]
    Encode(String),
    #[error("no active session")]
    NotAuthenticated,
}

/// Storage keys for the persisted token/identity pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: String,
    pub identity: String,
}

impl StorageKeys {
    pub fn namespaced(namespace: &str) -> Self {
        Self { token: format!("{namespace}:token"), identity: format!("{namespace}:user") }
    }
}

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    keys: StorageKeys,
    session: Option<Session>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// An empty store; call [`SessionStore::restore`] to load persisted state.
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys, session: None }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Load the persisted pair. Missing or partial data leaves the store
    /// empty; an unparseable identity is discarded along with its token.
    pub fn restore(&mut self) {
        self.session = None;
        let token = self.storage.get(&self.keys.token);
        let raw_identity = self.storage.get(&self.keys.identity);
        let (Some(token), Some(raw_identity)) = (token, raw_identity) else {
            return;
        };
        match serde_json::from_str::<Identity>(&raw_identity) {
            Ok(identity) => {
                log::debug!("session restored for {}", identity.id);
                self.session = Some(Session { token, identity });
            }
            Err(e) => {
                log::warn!("discarding corrupt persisted identity: {e}");
                self.clear_persisted();
            }
        }
    }

    /// Create a session remotely and adopt it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Api` if the remote call fails, or a storage/encode
    /// error if the pair cannot be persisted. In every error case the store
    /// and storage are left as they were.
    pub async fn sign_in<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        credentials: &SignInCredentials,
    ) -> Result<&Session, SessionError> {
        let payload = api.create_session(credentials).await?;
        self.establish(payload)
    }

    /// Persist `payload` as a pair, then make it the in-memory session.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity cannot be encoded or either write
    /// fails; nothing is left half-written.
    pub fn establish(&mut self, payload: SessionPayload) -> Result<&Session, SessionError> {
        let session = Session::from(payload);
        let raw_identity = encode_identity(&session.identity)?;

        let previous_token = self.storage.get(&self.keys.token);
        self.storage.set(&self.keys.token, &session.token)?;
        if let Err(e) = self.storage.set(&self.keys.identity, &raw_identity) {
            self.restore_token(previous_token.as_deref());
            return Err(e.into());
        }

        log::debug!("session established for {}", session.identity.id);
        Ok(self.session.insert(session))
    }

    /// Drop the session locally. Never calls the API.
    pub fn sign_out(&mut self) {
        self.clear_persisted();
        if let Some(previous) = self.session.take() {
            log::debug!("session cleared for {}", previous.identity.id);
        }
    }

    /// Replace the identity of the current session, keeping its token.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAuthenticated` when no session exists, or a
    /// storage/encode error if the identity cannot be persisted.
    pub fn update_identity(&mut self, identity: Identity) -> Result<(), SessionError> {
        let Some(session) = self.session.as_mut() else {
            return Err(SessionError::NotAuthenticated);
        };
        let raw_identity = encode_identity(&identity)?;
        self.storage.set(&self.keys.identity, &raw_identity)?;
        session.identity = identity;
        Ok(())
    }

    fn restore_token(&self, previous: Option<&str>) {
        let restored = match previous {
            Some(token) => self.storage.set(&self.keys.token, token),
            None => {
                self.storage.remove(&self.keys.token);
                Ok(())
            }
        };
        if let Err(e) = restored {
            log::warn!("could not roll back persisted token: {e}");
        }
    }

    fn clear_persisted(&self) {
        self.storage.remove(&self.keys.token);
        self.storage.remove(&self.keys.identity);
    }
}

impl<S> CredentialProvider for SessionStore<S> {
    fn bearer_token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }
}

fn encode_identity(identity: &Identity) -> Result<String, SessionError> {
    serde_json::to_string(identity).map_err(|e| SessionError::Encode(e.to_string()))
}

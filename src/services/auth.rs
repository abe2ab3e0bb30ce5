//! Shared authentication context.
//!
//! Constructed once at the application root and handed down through Leptos
//! context, so every component observes the same session.

use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::common::{SessionError, StorageError};
use crate::services::{AUTH_TOKEN_KEY, KeyValueStore, USER_KEY};

/// The session-start transition the login flow drives on success.
#[async_trait(?Send)]
pub trait SessionStarter {
    async fn start_session(&self, token: &str) -> Result<(), SessionError>;
}

#[derive(Clone)]
pub struct AuthContext {
    token: RwSignal<Option<String>>,
    store: Arc<dyn KeyValueStore>,
}

impl AuthContext {
    /// Creates the context, restoring a previously persisted token.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let restored = match store.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("could not restore session: {e}");
                None
            }
        };

        Self {
            token: RwSignal::new(restored),
            store,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    pub async fn login(&self, token: &str) -> Result<(), SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }

        self.token.set(Some(token.to_string()));
        log::info!("session started");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        self.store.remove(AUTH_TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        self.token.set(None);
        Ok(())
    }
}

#[async_trait(?Send)]
impl SessionStarter for AuthContext {
    async fn start_session(&self, token: &str) -> Result<(), SessionError> {
        self.login(token).await
    }
}

pub fn provide_auth_context(auth: AuthContext) {
    provide_context(auth);
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

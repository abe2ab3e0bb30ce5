//! The login submission: one network call, then persistence and the
//! session-start transition.

use std::sync::Arc;

use crate::common::{LoginError, StorageError};
use crate::forms::{LoginFormData, LoginFormState, SubmitBlocked};
use crate::services::{
    AUTH_TOKEN_KEY, KeyValueStore, LoginApi, LoginReply, RequestScope, SessionStarter, USER_KEY,
};
use crate::types::{LoginRequest, LoginResponse};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    /// The server answered with a 2xx other than 200; nothing was stored.
    Unconfirmed(u16),
}

pub struct LoginFlow<A, S> {
    api: A,
    store: Arc<dyn KeyValueStore>,
    session: S,
}

impl<A: LoginApi, S: SessionStarter> LoginFlow<A, S> {
    pub fn new(api: A, store: Arc<dyn KeyValueStore>, session: S) -> Self {
        Self {
            api,
            store,
            session,
        }
    }

    /// Submits already validated credentials.
    ///
    /// Only the network call is bound to `scope`; once a response is in hand
    /// the stored credentials and the session are updated together or not
    /// at all.
    pub async fn submit(
        &self,
        request: &LoginRequest,
        scope: &RequestScope,
    ) -> Result<LoginOutcome, LoginError> {
        log::debug!("submitting login request");

        let reply = scope
            .run(self.api.login(request))
            .await
            .ok_or(LoginError::Cancelled)??;

        match reply {
            LoginReply::Authenticated(response) => {
                self.persist(&response)?;
                if let Err(e) = self.session.start_session(&response.token).await {
                    self.discard_credentials();
                    return Err(e.into());
                }
                Ok(LoginOutcome::SignedIn)
            }
            LoginReply::Accepted(status) => {
                log::warn!("login answered with status {status}, nothing stored");
                Ok(LoginOutcome::Unconfirmed(status))
            }
        }
    }

    /// Validates `form`, then submits it while tracking progress in `state`.
    ///
    /// Invalid input and duplicate submissions never reach the network.
    pub async fn submit_form(
        &self,
        form: &LoginFormData,
        state: &mut LoginFormState,
        scope: &RequestScope,
    ) -> Result<Result<LoginOutcome, LoginError>, SubmitBlocked> {
        let request = state.begin(form)?;
        let result = self.submit(&request, scope).await;
        state.finish(&result);
        Ok(result)
    }

    fn persist(&self, response: &LoginResponse) -> Result<(), StorageError> {
        let user = serde_json::to_string(&response.user)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;

        self.store.set(AUTH_TOKEN_KEY, &response.token)?;
        if let Err(e) = self.store.set(USER_KEY, &user) {
            self.discard_credentials();
            return Err(e);
        }
        Ok(())
    }

    fn discard_credentials(&self) {
        for key in [AUTH_TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                log::warn!("could not roll back {key}: {e}");
            }
        }
    }
}

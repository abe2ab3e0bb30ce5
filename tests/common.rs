#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use leptos::prelude::Owner;
use serde_json::json;

use nbuyit_client::common::*;
use nbuyit_client::forms::*;
use nbuyit_client::services::*;
use nbuyit_client::types::*;

pub const TOKEN: &str = "T";

pub fn valid_form() -> LoginFormData {
    LoginFormData {
        email: "ivan@nbuyit.bg".to_string(),
        password: "hunter2".to_string(),
    }
}

pub fn valid_request() -> LoginRequest {
    LoginRequest {
        email: "ivan@nbuyit.bg".to_string(),
        password: "hunter2".to_string(),
    }
}

pub fn seed_user() -> serde_json::Value {
    json!({ "id": 7, "email": "ivan@nbuyit.bg", "name": "Иван" })
}

pub fn signed_in_reply() -> LoginReply {
    LoginReply::Authenticated(LoginResponse {
        token: TOKEN.to_string(),
        user: seed_user(),
    })
}

/// Signals created by the auth context need a reactive owner.
pub fn reactive_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

struct MockApiInner {
    reply: Option<Result<LoginReply, ApiError>>,
    calls: Cell<usize>,
    last_request: RefCell<Option<LoginRequest>>,
}

/// Login API double. Without a canned reply, calls never resolve.
#[derive(Clone)]
pub struct MockLoginApi {
    inner: Rc<MockApiInner>,
}

impl MockLoginApi {
    fn with_reply(reply: Option<Result<LoginReply, ApiError>>) -> Self {
        Self {
            inner: Rc::new(MockApiInner {
                reply,
                calls: Cell::new(0),
                last_request: RefCell::new(None),
            }),
        }
    }

    pub fn replying(reply: LoginReply) -> Self {
        Self::with_reply(Some(Ok(reply)))
    }

    pub fn failing(error: ApiError) -> Self {
        Self::with_reply(Some(Err(error)))
    }

    pub fn pending() -> Self {
        Self::with_reply(None)
    }

    pub fn calls(&self) -> usize {
        self.inner.calls.get()
    }

    pub fn last_request(&self) -> Option<LoginRequest> {
        self.inner.last_request.borrow().clone()
    }
}

#[async_trait(?Send)]
impl LoginApi for MockLoginApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, ApiError> {
        self.inner.calls.set(self.inner.calls.get() + 1);
        *self.inner.last_request.borrow_mut() = Some(request.clone());

        match &self.inner.reply {
            Some(reply) => reply.clone(),
            None => std::future::pending().await,
        }
    }
}

struct SessionInner {
    tokens: RefCell<Vec<String>>,
    error: Option<SessionError>,
}

#[derive(Clone)]
pub struct RecordingSession {
    inner: Rc<SessionInner>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(SessionInner {
                tokens: RefCell::new(Vec::new()),
                error: None,
            }),
        }
    }

    pub fn rejecting(error: SessionError) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                tokens: RefCell::new(Vec::new()),
                error: Some(error),
            }),
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        self.inner.tokens.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SessionStarter for RecordingSession {
    async fn start_session(&self, token: &str) -> Result<(), SessionError> {
        self.inner.tokens.borrow_mut().push(token.to_string());
        match &self.inner.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// Memory store whose writes to one key always fail.
#[derive(Clone, Default)]
pub struct FailingStore {
    pub entries: MemoryStore,
    pub failing_key: &'static str,
}

impl FailingStore {
    pub fn failing_on(key: &'static str) -> Self {
        Self {
            entries: MemoryStore::new(),
            failing_key: key,
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.entries.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.failing_key {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key)
    }
}

pub fn flow_with(
    api: &MockLoginApi,
    store: &MemoryStore,
    session: &RecordingSession,
) -> LoginFlow<MockLoginApi, RecordingSession> {
    LoginFlow::new(api.clone(), Arc::new(store.clone()), session.clone())
}

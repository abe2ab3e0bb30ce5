use async_trait::async_trait;
use reqwest::StatusCode;

use crate::common::ApiError;
use crate::config::ClientConfig;
use crate::types::{ApiErrorBody, LoginRequest, LoginResponse};

/// What a login call that reached the server and succeeded came back with.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginReply {
    /// `200 OK` carrying credentials.
    Authenticated(LoginResponse),
    /// Any other 2xx status. Nothing is persisted for these.
    Accepted(u16),
}

#[async_trait(?Send)]
pub trait LoginApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpLoginApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLoginApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.login_endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl LoginApi for HttpLoginApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::OK {
            let body = response
                .json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            return Ok(LoginReply::Authenticated(body));
        }

        if status.is_success() {
            return Ok(LoginReply::Accepted(status.as_u16()));
        }

        // The error body is optional; anything unparsable means "no message".
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

use thiserror::Error;

pub const LOGIN_FAILED: &str = "Login failed";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid server URL {url:?}: {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Unsupported server URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}

/// Failure of the remote login call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered, but not with success.
    #[error("Server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// No response was received at all.
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed response body: {0}")]
    Decode(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Local storage is unavailable")]
    Unavailable,

    #[error("Failed to read {key:?}: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write {key:?}: {reason}")]
    Write { key: String, reason: String },

    #[error("Failed to serialize value: {0}")]
    Serialize(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Cannot start a session with an empty token")]
    EmptyToken,

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Could not persist credentials: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not start session: {0}")]
    Session(#[from] SessionError),

    #[error("Login request was cancelled")]
    Cancelled,
}

impl LoginError {
    /// Banner text for this failure, `None` when nothing should be shown.
    pub fn user_message(&self) -> Option<String> {
        match self {
            LoginError::Api(ApiError::Status { message, .. }) => Some(
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(LOGIN_FAILED)
                    .to_string(),
            ),
            LoginError::Api(_) | LoginError::Storage(_) | LoginError::Session(_) => {
                Some(UNEXPECTED_ERROR.to_string())
            }
            LoginError::Cancelled => None,
        }
    }
}

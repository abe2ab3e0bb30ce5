//! Login form validation and submission state.
//!
//! Validation is a pure function of the raw input; the submission side
//! effect lives in [`crate::services::LoginFlow`].

use regex::Regex;
use std::sync::OnceLock;

use crate::common::LoginError;
use crate::services::LoginOutcome;
use crate::types::LoginRequest;

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";

pub const SIGN_IN_LABEL: &str = "Sign In";
pub const SIGNING_IN_LABEL: &str = "Logging In...";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("Invalid email pattern")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_pattern().is_match(email)
}

/// Raw, unvalidated form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl LoginFormData {
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let errors = FieldErrors {
            email: (!is_valid_email(&self.email)).then_some(INVALID_EMAIL),
            password: self.password.is_empty().then_some(PASSWORD_REQUIRED),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    Invalid(FieldErrors),
    InFlight,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub is_submitting: bool,
    pub api_error: Option<String>,
    pub field_errors: FieldErrors,
    attempted: bool,
}

impl LoginFormState {
    /// Validates `form` and enters the submitting state. Invalid input only
    /// updates the field errors.
    pub fn begin(&mut self, form: &LoginFormData) -> Result<LoginRequest, SubmitBlocked> {
        if self.is_submitting {
            return Err(SubmitBlocked::InFlight);
        }

        self.attempted = true;
        match form.validate() {
            Ok(request) => {
                self.field_errors = FieldErrors::default();
                self.is_submitting = true;
                self.api_error = None;
                Ok(request)
            }
            Err(errors) => {
                self.field_errors = errors;
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    /// Re-runs validation after input changes, once a submit was attempted.
    pub fn revalidate(&mut self, form: &LoginFormData) {
        if self.attempted {
            self.field_errors = form.validate().err().unwrap_or_default();
        }
    }

    pub fn finish(&mut self, result: &Result<LoginOutcome, LoginError>) {
        self.is_submitting = false;
        self.api_error = match result {
            Ok(_) => None,
            Err(e) => e.user_message(),
        };
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            SIGNING_IN_LABEL
        } else {
            SIGN_IN_LABEL
        }
    }
}

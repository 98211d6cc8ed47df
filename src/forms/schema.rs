//! Auth form payloads and their field rules

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::flows::Flow;
use crate::error::{Error, Result};

const PASSWORD_MIN_LENGTH: usize = 8;
const NAME_MIN_LENGTH: usize = 3;

const MSG_PASSWORD_LENGTH: &str = "Minimum 8 characters long";
const MSG_NAME_LENGTH: &str = "Minimum 3 characters long";
const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
const MSG_INVALID_TOKEN: &str = "The password reset link is invalid or has expired";

/// A single failed field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All failed rules of one form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Messages recorded for one field
    pub fn field(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    fn into_result(self) -> std::result::Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Field rules checked before a form is handed to the auth service
pub trait Validate {
    fn validate(&self) -> std::result::Result<(), ValidationErrors>;
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant pattern, a failure here is a bug in the codebase
    Regex::new(r"^[^\s@]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Invalid regex pattern - this is a bug in the codebase")
});

/// Values are checked as submitted, surrounding whitespace makes an email invalid
fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn check_email(errors: &mut ValidationErrors, email: &str, message: &str) {
    if !is_valid_email(email) {
        errors.add("email", message);
    }
}

fn check_min_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
    message: &str,
) {
    // Lengths count UTF-16 code units, the same as the browser-side rules
    if value.encode_utf16().count() < min {
        errors.add(field, message);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remember_me: Option<bool>,
}

impl Validate for LoginForm {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email, "Invalid email address");
        check_min_length(
            &mut errors,
            "password",
            &self.password,
            PASSWORD_MIN_LENGTH,
            MSG_PASSWORD_LENGTH,
        );
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Validate for SignupForm {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_min_length(
            &mut errors,
            "name",
            &self.name,
            NAME_MIN_LENGTH,
            MSG_NAME_LENGTH,
        );
        check_email(&mut errors, &self.email, "Invalid email");
        check_min_length(
            &mut errors,
            "password",
            &self.password,
            PASSWORD_MIN_LENGTH,
            MSG_PASSWORD_LENGTH,
        );
        errors.into_result()
    }
}

/// Request for a password reset link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetPasswordForm {
    #[serde(default)]
    pub email: String,
}

impl Validate for ResetPasswordForm {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email, "Invalid email");
        errors.into_result()
    }
}

/// New password submitted from a reset link; `token` comes from the link's query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPasswordForm {
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl NewPasswordForm {
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl Validate for NewPasswordForm {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !self.has_token() {
            errors.add("token", MSG_INVALID_TOKEN);
        }
        check_min_length(
            &mut errors,
            "newPassword",
            &self.new_password,
            PASSWORD_MIN_LENGTH,
            MSG_PASSWORD_LENGTH,
        );
        check_min_length(
            &mut errors,
            "confirmPassword",
            &self.confirm_password,
            PASSWORD_MIN_LENGTH,
            MSG_PASSWORD_LENGTH,
        );
        if self.new_password != self.confirm_password {
            errors.add("confirmPassword", MSG_PASSWORD_MISMATCH);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResendVerificationForm {
    #[serde(default)]
    pub email: String,
}

impl Validate for ResendVerificationForm {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email, "Invalid email");
        errors.into_result()
    }
}

/// The auth forms, addressable by their page slug
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
    ResetPassword,
    NewPassword,
    ResendVerification,
}

impl FormKind {
    pub const ALL: [FormKind; 5] = [
        FormKind::Login,
        FormKind::Signup,
        FormKind::ResetPassword,
        FormKind::NewPassword,
        FormKind::ResendVerification,
    ];

    /// The auth flow this form starts
    pub fn flow(&self) -> Flow {
        match self {
            FormKind::Login => Flow::Login,
            FormKind::Signup => Flow::Signup,
            FormKind::ResetPassword => Flow::ResetPassword,
            FormKind::NewPassword => Flow::NewPassword,
            FormKind::ResendVerification => Flow::ResendVerification,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::Signup => "signup",
            FormKind::ResetPassword => "reset-password",
            FormKind::NewPassword => "new-password",
            FormKind::ResendVerification => "resend-verification",
        }
    }

    /// Parse a JSON payload for this form and run its field rules
    pub fn validate_json(&self, payload: serde_json::Value) -> Result<()> {
        match self {
            FormKind::Login => check::<LoginForm>(payload),
            FormKind::Signup => check::<SignupForm>(payload),
            FormKind::ResetPassword => check::<ResetPasswordForm>(payload),
            FormKind::NewPassword => check::<NewPasswordForm>(payload),
            FormKind::ResendVerification => check::<ResendVerificationForm>(payload),
        }
    }
}

fn check<F>(payload: serde_json::Value) -> Result<()>
where
    F: Validate + for<'de> Deserialize<'de>,
{
    let form: F = serde_json::from_value(payload)?;
    form.validate().map_err(Error::from)
}

impl FromStr for FormKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FormKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| Error::UnknownForm(s.to_string()))
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

//! Where each auth flow sends the visitor once the auth service has answered

use serde::Serialize;

use crate::config::RouteConfig;

pub const CHECK_EMAIL_PATH: &str = "/check-email";
pub const RESEND_VERIFICATION_PATH: &str = "/resend-verification";
pub const RESET_PASSWORD_PATH: &str = "/reset-password";

/// Status the auth service answers with when the email is not verified yet
const EMAIL_NOT_VERIFIED: u16 = 403;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flow {
    Login,
    Signup,
    ResetPassword,
    NewPassword,
    ResendVerification,
    /// OAuth sign-in through a social provider
    Social,
}

/// Answer from the auth service for one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed { status: u16 },
    /// The reset link carried no token, the form never reached the auth service
    MissingToken,
}

impl Flow {
    /// URL the auth service should send the visitor to after an emailed link or OAuth round trip
    pub fn callback_url<'a>(&self, routes: &'a RouteConfig) -> Option<&'a str> {
        match self {
            Flow::Login | Flow::Signup | Flow::ResendVerification | Flow::Social => {
                Some(routes.protected_root.as_str())
            }
            Flow::ResetPassword | Flow::NewPassword => None,
        }
    }

    /// Next page for an outcome. `None` means stay and show the error.
    pub fn next_path(&self, outcome: Outcome, routes: &RouteConfig) -> Option<String> {
        match (self, outcome) {
            (Flow::Login | Flow::Social, Outcome::Success) => Some(routes.protected_root.clone()),
            (Flow::Login, Outcome::Failed { status }) if status == EMAIL_NOT_VERIFIED => {
                Some(RESEND_VERIFICATION_PATH.to_string())
            }
            (Flow::Signup | Flow::ResetPassword | Flow::ResendVerification, Outcome::Success) => {
                Some(CHECK_EMAIL_PATH.to_string())
            }
            (Flow::NewPassword, Outcome::Success) => Some(routes.login_path.clone()),
            (Flow::NewPassword, Outcome::MissingToken) => Some(RESET_PASSWORD_PATH.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success_goes_to_dashboard() {
        let routes = RouteConfig::default();
        assert_eq!(
            Flow::Login.next_path(Outcome::Success, &routes).as_deref(),
            Some("/dashboard")
        );
    }

    #[test]
    fn test_unverified_login_goes_to_resend() {
        let routes = RouteConfig::default();
        assert_eq!(
            Flow::Login
                .next_path(Outcome::Failed { status: 403 }, &routes)
                .as_deref(),
            Some("/resend-verification")
        );
        assert_eq!(
            Flow::Login.next_path(Outcome::Failed { status: 401 }, &routes),
            None
        );
    }

    #[test]
    fn test_signup_and_resend_go_to_check_email() {
        let routes = RouteConfig::default();
        for flow in [Flow::Signup, Flow::ResetPassword, Flow::ResendVerification] {
            assert_eq!(
                flow.next_path(Outcome::Success, &routes).as_deref(),
                Some(CHECK_EMAIL_PATH)
            );
        }
    }

    #[test]
    fn test_new_password_paths() {
        let routes = RouteConfig::default();
        assert_eq!(
            Flow::NewPassword.next_path(Outcome::Success, &routes).as_deref(),
            Some("/login")
        );
        assert_eq!(
            Flow::NewPassword
                .next_path(Outcome::MissingToken, &routes)
                .as_deref(),
            Some("/reset-password")
        );
    }

    #[test]
    fn test_callback_follows_protected_root() {
        let routes = RouteConfig {
            protected_root: "/app".to_string(),
            ..RouteConfig::default()
        };
        assert_eq!(Flow::Social.callback_url(&routes), Some("/app"));
        assert_eq!(Flow::NewPassword.callback_url(&routes), None);
    }
}

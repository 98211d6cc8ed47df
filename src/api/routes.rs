//! API route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use super::server::SharedState;
use crate::error::Error;
use crate::forms::{FormKind, Outcome, ValidationErrors};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub form: String,
    pub valid: bool,
    pub errors: ValidationErrors,
    /// Where the auth service sends the visitor back after an emailed link or OAuth
    pub callback_url: Option<String>,
    /// Page to open once the auth service accepts the submission, or right away
    /// when the form cannot be submitted at all
    pub next: Option<String>,
}

// Health check

pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    tracing::trace!(protected_root = %state.config.routes.protected_root, "health check");
    Json(ApiResponse::ok("healthy"))
}

// Forms

/// Run a form's field rules against a JSON payload
pub async fn validate_form(
    State(state): State<SharedState>,
    Path(form): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> impl IntoResponse {
    let kind = match form.parse::<FormKind>() {
        Ok(kind) => kind,
        Err(e) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<FormValidation>::err(e.to_string())),
            )
                .into_response()
        }
    };

    let routes = &state.config.routes;
    let flow = kind.flow();
    let callback_url = flow.callback_url(routes).map(str::to_string);

    match kind.validate_json(payload) {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::ok(FormValidation {
                form,
                valid: true,
                errors: ValidationErrors::new(),
                callback_url,
                next: flow.next_path(Outcome::Success, routes),
            })),
        )
            .into_response(),
        Err(Error::Validation(errors)) => {
            tracing::debug!(%form, %errors, "form rejected");
            let next = if errors.field("token").is_empty() {
                None
            } else {
                flow.next_path(Outcome::MissingToken, routes)
            };
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::ok(FormValidation {
                    form,
                    valid: false,
                    errors,
                    callback_url,
                    next,
                })),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<FormValidation>::err(e.to_string())),
        )
            .into_response(),
    }
}

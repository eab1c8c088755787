//! HTTP request handlers for the mock server.

pub mod hooks;
pub mod runs;

pub use hooks::*;
pub use runs::*;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiErrorBody;
use crate::mock_server::state::MockState;

/// Build a lakeFS-style error response.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiErrorBody {
            message: message.into(),
            code: None,
        }),
    )
        .into_response()
}

/// Reject the request if the state requires credentials that were not sent.
pub(crate) fn check_auth(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let Some(required) = state.required_authorization.as_deref() else {
        return Ok(());
    };

    let sent = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    if sent == Some(required) {
        Ok(())
    } else {
        Err(error_response(StatusCode::UNAUTHORIZED, "error authenticating request"))
    }
}

//! Shared HTTP response helpers.
//!
//! Centralizes the status check and status-to-message translation so
//! endpoint modules stay focused on request construction and response
//! mapping.

use ava_core::responses::ErrorBody;

use crate::error::{ErrorKind, GatewayError};

/// Fixed user-facing message for a failure status.
#[must_use]
pub fn status_message(status: u16) -> String {
    let fixed = match status {
        400 => "Invalid data. Check the submitted fields.",
        401 => "Unauthorized. Log in again.",
        403 => "You do not have permission to perform this action.",
        404 => "Resource not found.",
        409 => "Conflict with the current state of the resource.",
        422 => "Unprocessable data.",
        500 => "Internal server error. Try again later.",
        503 => "Service temporarily unavailable. Try again later.",
        _ => return format!("Request failed with status {status}."),
    };
    fixed.to_string()
}

/// Check an HTTP response for a failure status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// returns [`GatewayError::Api`]; a `message` (then `error`) field in a JSON
/// body replaces the fixed message for the status.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let status = status.as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = ErrorBody::parse(&body)
        .as_ref()
        .and_then(ErrorBody::detail)
        .map_or_else(|| status_message(status), str::to_string);

    Err(GatewayError::Api {
        status,
        kind: ErrorKind::from_status(status),
        message,
    })
}

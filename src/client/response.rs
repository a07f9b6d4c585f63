//! Shared HTTP response handling for both API clients

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Map a non-success HTTP status onto [`ApiError`], passing successes through.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| format!("HTTP {}", status));

    let err = match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(message),
        s if s.is_server_error() => ApiError::ServerError(message),
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    };
    Err(err.into())
}

/// Read and deserialize a JSON body.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
    serde_json::from_str(&text).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
    })
}

/// Extract a human-readable message from an error body.
///
/// InsightVM answers `{"status", "message"}`; Cortex XDR wraps its error in
/// `{"reply": {"err_code", "err_msg"}}`. Anything else is returned verbatim.
fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct XdrReply {
        err_msg: Option<String>,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        reply: Option<XdrReply>,
    }

    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    parsed
        .and_then(|b| b.message.or(b.reply.and_then(|r| r.err_msg)))
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
}

//! # API error taxonomy
//!
//! Four kinds of failure, matching the four ways a dashboard action can go
//! wrong:
//!
//! | Variant | Meaning | UI reaction |
//! |---------|---------|-------------|
//! | [`ApiError::Auth`] | bad credentials or an expired session | back to the login screen |
//! | [`ApiError::Network`] | no response reached the server | logged, or surfaced in the open form |
//! | [`ApiError::Api`] | the server responded non-2xx | the server's message, or a generic failure |
//! | [`ApiError::Validation`] | a required field is missing | shown next to the form, nothing sent |
//!
//! No error here is fatal: every failure path returns the UI to a stable,
//! previously valid state.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Invalid credentials or an expired session.
    #[error("{0}")]
    Auth(String),

    /// The request never produced a response (DNS, refused, offline).
    #[error("Connection error. Please try again.")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A required field was missing; caught before anything was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Whether this error should force a return to the login screen.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

/// Error payload the backend attaches to rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Map a non-2xx response to an [`ApiError`].
///
/// The server-provided `{"error": ...}` message is used when present,
/// otherwise a generic failure. 401 always means the session is no longer
/// valid and becomes [`ApiError::Auth`].
pub(crate) fn error_from_response(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty());

    if status == 401 {
        return ApiError::Auth(message.unwrap_or_else(|| "Session expired".to_string()));
    }

    ApiError::Api {
        status,
        message: message.unwrap_or_else(|| format!("Request failed with status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let err = error_from_response(400, r#"{"error":"Title already exists"}"#);
        assert_eq!(
            err,
            ApiError::Api {
                status: 400,
                message: "Title already exists".to_string()
            }
        );
        assert_eq!(err.to_string(), "Title already exists");
    }

    #[test]
    fn missing_or_malformed_body_falls_back_to_generic() {
        let err = error_from_response(500, "");
        assert_eq!(err.to_string(), "Request failed with status 500");

        let err = error_from_response(404, "<html>not json</html>");
        assert_eq!(err.to_string(), "Request failed with status 404");

        // An empty error string is as good as no message.
        let err = error_from_response(400, r#"{"error":""}"#);
        assert_eq!(err.to_string(), "Request failed with status 400");
    }

    #[test]
    fn unauthorized_becomes_auth_error() {
        let err = error_from_response(401, r#"{"error":"Invalid credentials"}"#);
        assert_eq!(err, ApiError::Auth("Invalid credentials".to_string()));
        assert!(err.is_auth());

        let err = error_from_response(401, "");
        assert_eq!(err, ApiError::Auth("Session expired".to_string()));
    }

    #[test]
    fn non_auth_errors_do_not_force_logout() {
        assert!(!error_from_response(500, "").is_auth());
        assert!(!ApiError::Network("timeout".to_string()).is_auth());
        assert!(!ApiError::Validation("Title is required".to_string()).is_auth());
    }
}

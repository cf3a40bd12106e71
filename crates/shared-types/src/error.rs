use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of errors surfaced by the API client and forms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The request never produced a response (DNS, refused, CORS, offline).
    Transport,
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest,
    /// Input rejected before dispatch, or a 422 from the backend.
    ValidationError,
    Server,
    /// A response arrived but its body could not be read as the expected shape.
    Decode,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Transport => write!(f, "Transport"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Server => write!(f, "Server"),
            AppErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Structured error shared by the API client, the session store and the views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Error body shapes the backend is known to send.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Transport, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Server, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Build an error from a non-success HTTP status and its raw body.
    ///
    /// The backend answers failures with `{"message": ...}` or `{"error": ...}`;
    /// either becomes the message. Anything else falls back to the status text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        let kind = match status {
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            422 => AppErrorKind::ValidationError,
            400..=499 => AppErrorKind::BadRequest,
            _ => AppErrorKind::Server,
        };
        Self::new(kind, message)
    }

    /// True for errors caused by a missing, expired or insufficient credential.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.kind, AppErrorKind::Unauthorized | AppErrorKind::Forbidden)
    }

    /// Message suitable for an inline banner.
    ///
    /// Transport and decode failures carry low-level text, so they are replaced
    /// by a generic sentence; backend messages are shown as-is.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Transport => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            AppErrorKind::Decode => "Something went wrong. Please try again.".to_string(),
            AppErrorKind::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            AppErrorKind::Forbidden => "You do not have access to this resource.".to_string(),
            _ => self.message.clone(),
        }
    }

    /// First field error for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_reads_message_field() {
        let err = AppError::from_status(500, r#"{"message":"Doctor not found"}"#);
        assert_eq!(err.kind, AppErrorKind::Server);
        assert_eq!(err.message, "Doctor not found");
    }

    #[test]
    fn from_status_reads_error_field() {
        let err = AppError::from_status(400, r#"{"error":"Email already in use"}"#);
        assert_eq!(err.kind, AppErrorKind::BadRequest);
        assert_eq!(err.message, "Email already in use");
    }

    #[test]
    fn from_status_falls_back_for_empty_or_garbage_body() {
        let err = AppError::from_status(401, "");
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Request failed with status 401");

        let err = AppError::from_status(503, "<html>bad gateway</html>");
        assert_eq!(err.kind, AppErrorKind::Server);
    }

    #[test]
    fn status_kind_mapping() {
        assert_eq!(AppError::from_status(403, "").kind, AppErrorKind::Forbidden);
        assert_eq!(AppError::from_status(404, "").kind, AppErrorKind::NotFound);
        assert_eq!(
            AppError::from_status(422, "").kind,
            AppErrorKind::ValidationError
        );
        assert_eq!(AppError::from_status(409, "").kind, AppErrorKind::BadRequest);
    }

    #[test]
    fn auth_failures_are_flagged() {
        assert!(AppError::unauthorized("x").is_auth_failure());
        assert!(AppError::forbidden("x").is_auth_failure());
        assert!(!AppError::transport("x").is_auth_failure());
    }

    #[test]
    fn friendly_message_hides_transport_details() {
        let err = AppError::transport("error sending request for url (http://localhost:8080)");
        assert!(!err.friendly_message().contains("localhost"));
        assert_eq!(AppError::bad_request("Slot taken").friendly_message(), "Slot taken");
    }

    #[test]
    fn validation_error_exposes_fields() {
        let mut fields = HashMap::new();
        fields.insert("date".to_string(), "Pick a date".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("date"), Some("Pick a date"));
        assert_eq!(err.field("notes"), None);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }
}

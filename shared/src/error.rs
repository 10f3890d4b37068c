use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum CalendarError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned {status}: {message}")]
    Http {
        status: u16,
        message: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl CalendarError {
    /// Builds an HTTP error from a status code and whatever body text the server sent.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Text suitable for showing inline next to the control that failed.
    ///
    /// HTTP errors prefer the server's own body text and fall back to the status.
    pub fn user_message(&self) -> String {
        match self {
            CalendarError::Http { status, message } => {
                let trimmed = message.trim();
                if trimmed.is_empty() {
                    format!("Server returned {}", status)
                } else {
                    trimmed.to_string()
                }
            }
            CalendarError::Network(msg)
            | CalendarError::Decode(msg)
            | CalendarError::Validation(msg)
            | CalendarError::Dom(msg) => msg.clone(),
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, CalendarError::Http { .. })
    }
}

impl From<ValidationErrors> for CalendarError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for CalendarError {
    fn from(error: JsonError) -> Self {
        Self::Decode(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn http_message_prefers_body_text() {
        let err = CalendarError::http(400, "Unknown team\n");
        assert_eq!(err.user_message(), "Unknown team");
    }

    #[test]
    fn http_message_falls_back_to_status() {
        let err = CalendarError::http(502, "   ");
        assert_eq!(err.user_message(), "Server returned 502");
        assert!(err.is_http());
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: CalendarError = serde_json::from_str::<serde_json::Value>("{ nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, CalendarError::Decode(_)));
    }
}

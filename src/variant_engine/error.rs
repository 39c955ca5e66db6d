use std::fmt;
use serde::{Deserialize, Serialize};

/// Everything that can abort a generation run.
///
/// The shuffle and render steps never produce these; they only come from
/// request validation, the question source, or parsing its payload.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Transport or quota failure of the question source (e.g. rate limiting).
    /// The caller may retry.
    #[error("question source unavailable: {0}")]
    Transport(String),
    #[error("malformed generator response: {0}")]
    MalformedResponse(String),
    #[error("generation failed: {0}")]
    Failure(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationErrorKind {
    Transport,
    MalformedResponse,
    Failure,
    InvalidRequest,
}

impl fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationErrorKind::Transport         => write!(f, "transport"),
            GenerationErrorKind::MalformedResponse => write!(f, "malformed response"),
            GenerationErrorKind::Failure           => write!(f, "failure"),
            GenerationErrorKind::InvalidRequest    => write!(f, "invalid request"),
        }
    }
}

impl GenerationError {
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            GenerationError::Transport(_)         => GenerationErrorKind::Transport,
            GenerationError::MalformedResponse(_) => GenerationErrorKind::MalformedResponse,
            GenerationError::Failure(_)           => GenerationErrorKind::Failure,
            GenerationError::InvalidRequest(_)    => GenerationErrorKind::InvalidRequest,
        }
    }

    /// Classify an error message reported by the upstream API client.
    ///
    /// Quota exhaustion (`RESOURCE_EXHAUSTED` / HTTP 429) is a transport error
    /// the user can retry; anything else is a generic failure.
    pub fn from_api_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("RESOURCE_EXHAUSTED") || message.contains("429") {
            GenerationError::Transport(message)
        } else {
            GenerationError::Failure(message)
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_messages_are_transport_errors() {
        let e = GenerationError::from_api_message("429 RESOURCE_EXHAUSTED. quota exceeded");
        assert_eq!(e.kind(), GenerationErrorKind::Transport);
        let e = GenerationError::from_api_message("RESOURCE_EXHAUSTED");
        assert_eq!(e.kind(), GenerationErrorKind::Transport);
    }

    #[test]
    fn other_api_messages_are_failures() {
        let e = GenerationError::from_api_message("500 INTERNAL");
        assert_eq!(e, GenerationError::Failure("500 INTERNAL".to_string()));
    }

    #[test]
    fn json_errors_become_malformed_response() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let e: GenerationError = err.into();
        assert_eq!(e.kind(), GenerationErrorKind::MalformedResponse);
    }
}

//! Centralized error types for ClaimForge.

use thiserror::Error;

/// Main error type for ClaimForge operations.
#[derive(Error, Debug)]
pub enum ClaimError {
    #[error("Claim text is empty")]
    EmptyClaim,

    #[error("Server responded with status {status}{}", fmt_detail(.detail))]
    Http { status: u16, detail: Option<String> },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to parse analysis response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preference store error: {0}")]
    Preference(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Result type for ClaimForge operations.
pub type ClaimResult<T> = Result<T, ClaimError>;

impl ClaimError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a preference store error.
    pub fn preference(msg: impl Into<String>) -> Self {
        Self::Preference(msg.into())
    }

    /// Whether the user can fix this by changing their input.
    ///
    /// Only an empty claim qualifies; HTTP, transport and parse failures are
    /// all reported to the user with the same fixed message.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::EmptyClaim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ClaimError::Http { status: 503, detail: None };
        assert_eq!(err.to_string(), "Server responded with status 503");

        let err = ClaimError::Http {
            status: 400,
            detail: Some("Missing claim text".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Server responded with status 400: Missing claim text"
        );
    }

    #[test]
    fn test_user_correctable() {
        assert!(ClaimError::EmptyClaim.is_user_correctable());
        assert!(!ClaimError::Transport("refused".into()).is_user_correctable());
        assert!(!ClaimError::Parse("eof".into()).is_user_correctable());
    }
}

//! Error types for BBC Sounds clients

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, SoundsError>;

/// Errors that can occur when talking to the BBC Sounds service
#[derive(Debug, thiserror::Error)]
pub enum SoundsError {
    /// Sign-in was rejected (bad username or password)
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// The service refused the request (expired or missing session)
    #[error("Unauthorised: {0}")]
    Unauthorized(String),

    /// No delivery token was issued for a media request. The BBC only
    /// issues delivery tokens to UK clients or signed-in accounts.
    #[error("No delivery token available for {0}")]
    NoDeliveryToken(String),

    /// Station not found
    #[error("Station not found: {0}")]
    StationNotFound(String),

    /// The service knows the item but exposes no stream for it
    #[error("No stream available for {0}")]
    NoStream(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error status
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SoundsError {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an API error from an HTTP status code and message
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(message.into()),
            404 => Self::StationNotFound(message.into()),
            _ => Self::ApiError {
                status,
                message: message.into(),
            },
        }
    }

    /// Check whether the error indicates bad or missing credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::LoginFailed(_) | Self::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            SoundsError::from_status(401, "nope"),
            SoundsError::Unauthorized(_)
        ));
        assert!(matches!(
            SoundsError::from_status(404, "gone"),
            SoundsError::StationNotFound(_)
        ));
        assert!(matches!(
            SoundsError::from_status(500, "boom"),
            SoundsError::ApiError { status: 500, .. }
        ));
    }

    #[test]
    fn test_is_auth_error() {
        assert!(SoundsError::LoginFailed("bad password".into()).is_auth_error());
        assert!(SoundsError::Unauthorized("expired".into()).is_auth_error());
        assert!(!SoundsError::other("boom").is_auth_error());
    }
}

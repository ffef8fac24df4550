//! Error types for the catalog source
//!
//! Browse never fails; these errors only surface from resolve and from
//! credential validation. Backend failures during resolve are folded into
//! the single [`SourceError::Unresolvable`] kind with guidance text picked
//! by [`SourceError::from_stream_error`].

use soundsclient::SoundsError;

/// Result type alias for catalog source operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// Guidance appended when a stream is blocked for lack of a delivery token
const GEO_HINT: &str =
    "BBC Sounds streams are geo-restricted to the UK; adding account credentials may help";

/// Guidance appended when the service rejected our session
const AUTH_HINT: &str = "authentication failed, check your BBC account credentials";

/// Errors surfaced by the catalog source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Identifier is not of the `"<category>/<id>"` form
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// No client capability was injected at setup
    #[error("BBC Sounds not configured")]
    NotConfigured,

    /// The identifier is well-formed but no playable stream came back
    #[error("Could not resolve media: {0}")]
    Unresolvable(String),
}

impl SourceError {
    /// Classify a client error raised during stream resolution
    ///
    /// Matching is on the message text, case-insensitive, because client
    /// implementations outside this workspace may only surface generic
    /// error kinds. The geo and auth hints are mutually exclusive; whatever
    /// matches neither keeps the underlying message verbatim.
    pub fn from_stream_error(err: &SoundsError) -> Self {
        let message = err.to_string();
        let lower = message.to_lowercase();

        if lower.contains("delivery token") {
            Self::Unresolvable(format!("{message} ({GEO_HINT})"))
        } else if lower.contains("401") || lower.contains("unauthorised") {
            Self::Unresolvable(format!("{message} ({AUTH_HINT})"))
        } else {
            Self::Unresolvable(message)
        }
    }
}

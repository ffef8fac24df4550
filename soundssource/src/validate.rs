//! Credential validation for the setup flow
//!
//! Mirrors what an interactive setup form needs: try the credentials once,
//! hand back a display title on success, and distinguish "wrong password"
//! from "service unreachable" so the form can show the right message.

use soundsclient::{SoundsClient, SoundsError};
use tracing::{debug, warn};

/// Outcome of a failed credential validation
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The service rejected the username/password pair
    #[error("Invalid authentication: {0}")]
    InvalidAuth(#[source] SoundsError),

    /// Anything else went wrong while contacting the service
    #[error("Cannot connect to BBC Sounds: {0}")]
    CannotConnect(#[source] SoundsError),
}

/// Validate optional account credentials against the service
///
/// Missing or empty credentials are not an error: the service allows
/// anonymous use (with fewer streams available). Returns the entry title
/// to display for the configured account.
///
/// # Errors
///
/// [`ValidationError::InvalidAuth`] when the service rejects the pair,
/// [`ValidationError::CannotConnect`] for any other client failure.
pub async fn validate_credentials(
    client: &dyn SoundsClient,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<String, ValidationError> {
    let (username, password) = match (username, password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            debug!("no credentials supplied, configuring anonymous access");
            return Ok("BBC Sounds (Anonymous)".to_string());
        }
    };

    match client.authenticate(username, password).await {
        Ok(()) => {
            debug!(username, "authenticated with BBC Sounds");
            Ok(format!("BBC Sounds ({username})"))
        }
        Err(err @ SoundsError::LoginFailed(_)) => {
            warn!(username, error = %err, "BBC Sounds rejected credentials");
            Err(ValidationError::InvalidAuth(err))
        }
        Err(err) => {
            warn!(error = %err, "could not validate BBC Sounds credentials");
            Err(ValidationError::CannotConnect(err))
        }
    }
}

//! Extension for storing BBC Sounds credentials in soundsconfig
//!
//! This module provides the trait `SoundsConfigExt` which adds credential
//! accessors to `soundsconfig::Config`. Both credentials are optional;
//! anonymous operation is the default.

use anyhow::Result;
use serde_yaml::Value;
use soundsconfig::Config;

const USERNAME_PATH: &[&str] = &["sounds", "username"];
const PASSWORD_PATH: &[&str] = &["sounds", "password"];

/// Extension trait for BBC Sounds settings in the configuration
///
/// # Example
///
/// ```rust,ignore
/// use soundsconfig::get_config;
/// use soundssource::SoundsConfigExt;
///
/// let config = get_config();
/// match config.get_sounds_credentials()? {
///     Some((username, _password)) => println!("Signed in as {}", username),
///     None => println!("Anonymous access"),
/// }
/// ```
pub trait SoundsConfigExt {
    /// Get the configured BBC account username, if any
    fn get_sounds_username(&self) -> Result<Option<String>>;

    /// Set the BBC account username
    fn set_sounds_username(&self, username: &str) -> Result<()>;

    /// Get the configured BBC account password, if any
    fn get_sounds_password(&self) -> Result<Option<String>>;

    /// Set the BBC account password
    fn set_sounds_password(&self, password: &str) -> Result<()>;

    /// Get the credential pair, or `None` unless both halves are present
    ///
    /// A lone username or password is treated as unconfigured; callers
    /// should fall back to anonymous access.
    fn get_sounds_credentials(&self) -> Result<Option<(String, String)>>;
}

impl SoundsConfigExt for Config {
    fn get_sounds_username(&self) -> Result<Option<String>> {
        self.get_optional_string(USERNAME_PATH)
    }

    fn set_sounds_username(&self, username: &str) -> Result<()> {
        self.set_value(USERNAME_PATH, Value::String(username.to_string()))
    }

    fn get_sounds_password(&self) -> Result<Option<String>> {
        self.get_optional_string(PASSWORD_PATH)
    }

    fn set_sounds_password(&self, password: &str) -> Result<()> {
        self.set_value(PASSWORD_PATH, Value::String(password.to_string()))
    }

    fn get_sounds_credentials(&self) -> Result<Option<(String, String)>> {
        match (self.get_sounds_username()?, self.get_sounds_password()?) {
            (Some(username), Some(password)) => Ok(Some((username, password))),
            _ => Ok(None),
        }
    }
}

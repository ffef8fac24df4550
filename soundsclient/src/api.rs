//! The client capability trait consumed by catalog sources
//!
//! Authentication, token refresh and the BBC wire protocol all live behind
//! this trait. The catalog layer only ever holds an `Arc<dyn SoundsClient>`
//! injected at construction time, so it can be driven by a real HTTP client
//! in production and by a canned client in tests.

use crate::error::Result;
use crate::models::{OnDemandStream, Station, StreamFormat};
use std::fmt::Debug;

/// Capability handle onto the BBC Sounds service
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use in async servers.
///
/// # Examples
///
/// ```rust,no_run
/// use soundsclient::{OnDemandStream, Result, SoundsClient, Station, StreamFormat};
///
/// #[derive(Debug)]
/// struct FixtureClient;
///
/// #[async_trait::async_trait]
/// impl SoundsClient for FixtureClient {
///     async fn authenticate(&self, _username: &str, _password: &str) -> Result<()> {
///         Ok(())
///     }
///
///     async fn live_stations(&self) -> Result<Vec<Station>> {
///         Ok(vec![Station::new("bbc_radio_fourfm", "Radio 4")])
///     }
///
///     async fn live_stream_url(&self, _id: &str, _format: StreamFormat) -> Result<String> {
///         Ok("https://example/live.m3u8".to_string())
///     }
///
///     async fn on_demand_stream(&self, _id: &str, _format: StreamFormat) -> Result<OnDemandStream> {
///         Ok(OnDemandStream::default())
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait SoundsClient: Debug + Send + Sync {
    /// Sign in with account credentials
    ///
    /// # Errors
    ///
    /// [`SoundsError::LoginFailed`](crate::SoundsError::LoginFailed) for
    /// rejected credentials; transport and API errors otherwise.
    async fn authenticate(&self, username: &str, password: &str) -> Result<()>;

    /// List the live radio stations currently on air
    async fn live_stations(&self) -> Result<Vec<Station>>;

    /// Get a playable stream URL for a live station
    ///
    /// # Arguments
    ///
    /// * `station_id` - Stable station identifier (e.g., "bbc_radio_fourfm")
    /// * `format` - Preferred transport; clients may fall back to another
    async fn live_stream_url(&self, station_id: &str, format: StreamFormat) -> Result<String>;

    /// Get the stream descriptor for an on-demand item (episode, clip)
    ///
    /// # Arguments
    ///
    /// * `content_id` - BBC programme identifier (e.g., "p0abc123")
    /// * `format` - Preferred transport; clients may fall back to another
    async fn on_demand_stream(
        &self,
        content_id: &str,
        format: StreamFormat,
    ) -> Result<OnDemandStream>;
}

//! BBC Sounds client boundary for SoundsCast
//!
//! This crate defines the capability contract between the SoundsCast catalog
//! layer and whatever actually speaks to the BBC Sounds service:
//!
//! - **Client Trait**: [`SoundsClient`] covers sign-in, live station listing
//!   and stream URL resolution for live and on-demand content
//! - **Models**: [`Station`] with explicit optional fields and documented
//!   fallback accessors, [`StreamFormat`], [`OnDemandStream`]
//! - **Errors**: [`SoundsError`] taxonomy shared by all implementations
//!
//! The wire protocol (token refresh, JWT handling, media selector calls) is
//! deliberately not part of this crate; production implementations bring
//! their own transport and only surface errors through [`SoundsError`].
//!
//! # Example
//!
//! ```no_run
//! use soundsclient::{SoundsClient, StreamFormat};
//! use std::sync::Arc;
//!
//! async fn play_radio_four(client: Arc<dyn SoundsClient>) -> soundsclient::Result<String> {
//!     let stations = client.live_stations().await?;
//!     println!("{} stations on air", stations.len());
//!
//!     client
//!         .live_stream_url("bbc_radio_fourfm", StreamFormat::Hls)
//!         .await
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;

// Re-exports
pub use api::SoundsClient;
pub use error::{Result, SoundsError};
pub use models::{OnDemandStream, Station, StreamFormat, UNKNOWN_STATION_TITLE};

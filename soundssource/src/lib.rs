//! BBC Sounds catalog source for SoundsCast
//!
//! This crate turns an injected [`SoundsClient`](soundsclient::SoundsClient)
//! capability into a browsable, playable media catalog:
//!
//! - **Browse**: a two-level tree (root, "Live Radio", stations) built
//!   fresh on every call. Browsing is total: unknown identifiers degrade
//!   to the root listing and backend failures degrade to a static table of
//!   eight well-known stations, so the UI always has something to click.
//! - **Resolve**: `"<category>/<id>"` identifiers become a stream URL plus
//!   MIME type. Failures are classified (geo-restriction, authentication,
//!   generic) and surfaced as one error kind with tailored guidance text.
//! - **Validation**: one-shot credential checking for setup flows.
//!
//! # Example
//!
//! ```no_run
//! use soundsclient::SoundsClient;
//! use soundssource::SoundsMediaSource;
//! use std::sync::Arc;
//!
//! async fn play(client: Arc<dyn SoundsClient>) -> soundssource::Result<()> {
//!     let source = SoundsMediaSource::new(client);
//!
//!     let live = source.browse("live").await;
//!     for station in &live.children {
//!         println!("{} -> {}", station.title, station.identifier);
//!     }
//!
//!     let stream = source.resolve("live/bbc_radio_fourfm").await?;
//!     println!("play {} as {}", stream.url, stream.mime_type);
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `config` (default): credential storage via `soundsconfig`
//! - `server`: axum routes for browse/resolve plus the embedded logo

pub mod catalog;
pub mod error;
pub mod identifier;
pub mod source;
pub mod validate;

#[cfg(feature = "config")]
pub mod config_ext;

#[cfg(feature = "server")]
pub mod api_rest;

// Re-exports
pub use catalog::{
    mime_for_url, CatalogNode, NodeKind, ResolvedStream, LOGO_PATH, MIME_DASH, MIME_HLS, MIME_MP3,
};
pub use error::{Result, SourceError};
pub use identifier::MediaId;
pub use source::{SoundsMediaSource, FALLBACK_STATIONS, LIVE_CATEGORY, SOURCE_NAME};
pub use validate::{validate_credentials, ValidationError};

#[cfg(feature = "config")]
pub use config_ext::SoundsConfigExt;

#[cfg(feature = "server")]
pub use api_rest::{create_router, SoundsState, SOUNDS_LOGO};

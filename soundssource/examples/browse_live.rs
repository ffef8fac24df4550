//! Example: Browse the live radio catalog and resolve a station
//!
//! Run with: cargo run -p soundssource --example browse_live
//!
//! Uses a canned client so the example works offline; swap in a real
//! `SoundsClient` implementation to browse the actual service.

use soundsclient::{OnDemandStream, Result, SoundsClient, Station, StreamFormat};
use soundssource::SoundsMediaSource;
use std::sync::Arc;

#[derive(Debug)]
struct CannedClient;

#[async_trait::async_trait]
impl SoundsClient for CannedClient {
    async fn authenticate(&self, _username: &str, _password: &str) -> Result<()> {
        Ok(())
    }

    async fn live_stations(&self) -> Result<Vec<Station>> {
        Ok(vec![
            Station::new("bbc_radio_fourfm", "Radio 4"),
            Station::new("bbc_6music", "Radio 6 Music"),
        ])
    }

    async fn live_stream_url(&self, station_id: &str, _format: StreamFormat) -> Result<String> {
        Ok(format!("https://stream.example/{station_id}.m3u8"))
    }

    async fn on_demand_stream(
        &self,
        content_id: &str,
        _format: StreamFormat,
    ) -> Result<OnDemandStream> {
        Ok(OnDemandStream {
            url: Some(format!("https://stream.example/{content_id}.mp3")),
            bitrate: Some(128),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let source = SoundsMediaSource::new(Arc::new(CannedClient));

    let root = source.browse("").await;
    println!("{}", root.title);

    for directory in &root.children {
        let listing = source.browse(&directory.identifier).await;
        println!("  {} ({} entries)", listing.title, listing.children.len());

        for station in &listing.children {
            println!("    {} -> {}", station.title, station.identifier);
        }
    }

    let stream = source.resolve("live/bbc_radio_fourfm").await?;
    println!("\nResolved: {} [{}]", stream.url, stream.mime_type);

    Ok(())
}

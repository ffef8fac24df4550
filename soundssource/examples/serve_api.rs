//! Example: Serve the catalog over HTTP
//!
//! Run with: cargo run -p soundssource --example serve_api --features server
//!
//! Then try:
//!   curl http://127.0.0.1:8080/api/sounds/browse
//!   curl "http://127.0.0.1:8080/api/sounds/resolve?id=live/bbc_radio_fourfm"
//!   curl http://127.0.0.1:8080/api/sounds/logo -o logo.png

use axum::Router;
use soundsclient::{OnDemandStream, Result, SoundsClient, Station, StreamFormat};
use soundssource::{api_rest, SoundsMediaSource};
use std::sync::Arc;

#[derive(Debug)]
struct CannedClient;

#[async_trait::async_trait]
impl SoundsClient for CannedClient {
    async fn authenticate(&self, _username: &str, _password: &str) -> Result<()> {
        Ok(())
    }

    async fn live_stations(&self) -> Result<Vec<Station>> {
        Ok(vec![Station::new("bbc_radio_fourfm", "Radio 4")])
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
    tracing_subscriber::fmt::init();

    let source = Arc::new(SoundsMediaSource::new(Arc::new(CannedClient)));
    let state = api_rest::SoundsState::new(source);

    let app = Router::new().nest("/api/sounds", api_rest::create_router(state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
    println!("Listening on http://127.0.0.1:8080/api/sounds");
    axum::serve(listener, app).await?;

    Ok(())
}

//! The BBC Sounds catalog source
//!
//! [`SoundsMediaSource`] answers the two queries the host platform makes:
//! `browse` turns an identifier into a [`CatalogNode`] tree and `resolve`
//! turns a leaf identifier into a [`ResolvedStream`]. Both are stateless;
//! the injected [`SoundsClient`] handle is the only collaborator.

use crate::catalog::{CatalogNode, ResolvedStream, LOGO_PATH, MIME_HLS};
use crate::error::{Result, SourceError};
use crate::identifier::MediaId;
use soundsclient::{SoundsClient, Station, StreamFormat};
use std::sync::Arc;
use tracing::{debug, warn};

/// Display name of the source
pub const SOURCE_NAME: &str = "BBC Sounds";

/// Title of the live radio directory
pub const LIVE_TITLE: &str = "Live Radio";

/// Category under which live stations are keyed
pub const LIVE_CATEGORY: &str = "live";

/// Well-known stations substituted when the live catalog cannot be fetched
///
/// Availability beats freshness: as long as a client is configured,
/// browsing the live directory always offers something to play.
pub const FALLBACK_STATIONS: [(&str, &str); 8] = [
    ("BBC Radio 1", "bbc_radio_one"),
    ("BBC Radio 2", "bbc_radio_two"),
    ("BBC Radio 3", "bbc_radio_three"),
    ("BBC Radio 4", "bbc_radio_fourfm"),
    ("BBC Radio 4 Extra", "bbc_radio_four_extra"),
    ("BBC Radio 5 Live", "bbc_radio_five_live"),
    ("BBC Radio 6 Music", "bbc_6music"),
    ("BBC World Service", "bbc_world_service"),
];

/// Browser/resolver over the BBC Sounds catalog
///
/// # Examples
///
/// ```no_run
/// use soundssource::SoundsMediaSource;
/// use soundsclient::SoundsClient;
/// use std::sync::Arc;
///
/// async fn setup(client: Arc<dyn SoundsClient>) {
///     let source = SoundsMediaSource::new(client);
///
///     let root = source.browse("").await;
///     assert_eq!(root.children[0].identifier, "live");
/// }
/// ```
pub struct SoundsMediaSource {
    /// Capability handle; `None` means the integration is unconfigured
    client: Option<Arc<dyn SoundsClient>>,
}

impl SoundsMediaSource {
    /// Create a source backed by an authenticated (or anonymous) client
    pub fn new(client: Arc<dyn SoundsClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Create a source with no client at all
    ///
    /// Browsing yields an empty root and resolving always fails with
    /// [`SourceError::NotConfigured`].
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Whether a client capability is attached
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Browse the catalog at `identifier`
    ///
    /// Total over all inputs: unrecognized identifiers degrade to the root
    /// listing and backend failures degrade to the fallback station table,
    /// so the UI always has something to show.
    pub async fn browse(&self, identifier: &str) -> CatalogNode {
        let Some(client) = self.client.as_ref() else {
            debug!("browse without configured client, returning empty root");
            return CatalogNode::empty_root(SOURCE_NAME);
        };

        match MediaId::parse(identifier) {
            MediaId::Category(category) if category == LIVE_CATEGORY => {
                self.browse_live(client.as_ref()).await
            }
            MediaId::Root => self.browse_root(),
            other => {
                debug!(?other, "unrecognized browse identifier, degrading to root");
                self.browse_root()
            }
        }
    }

    /// Resolve a leaf identifier to a playable stream
    ///
    /// # Errors
    ///
    /// [`SourceError::NotConfigured`] without a client,
    /// [`SourceError::InvalidIdentifier`] for anything not of the
    /// `"<category>/<id>"` form, [`SourceError::Unresolvable`] when the
    /// backend yields no stream. No I/O happens on the first two paths.
    pub async fn resolve(&self, identifier: &str) -> Result<ResolvedStream> {
        let client = self.client.as_ref().ok_or(SourceError::NotConfigured)?;

        let Some((category, id)) = MediaId::parse(identifier).item() else {
            return Err(SourceError::InvalidIdentifier(identifier.to_string()));
        };

        if category == LIVE_CATEGORY {
            let url = client
                .live_stream_url(id, StreamFormat::Hls)
                .await
                .map_err(|e| SourceError::from_stream_error(&e))?;
            return Ok(ResolvedStream::new(url, MIME_HLS));
        }

        // Any other category is treated as an on-demand programme id
        let stream = client
            .on_demand_stream(id, StreamFormat::Hls)
            .await
            .map_err(|e| SourceError::from_stream_error(&e))?;

        match stream.url {
            Some(url) => Ok(ResolvedStream::from_url(url)),
            None => Err(SourceError::Unresolvable(format!(
                "no stream available for {id}"
            ))),
        }
    }

    /// Root listing: one "live" directory, children not expanded eagerly
    fn browse_root(&self) -> CatalogNode {
        CatalogNode::directory("", SOURCE_NAME)
            .with_thumbnail(LOGO_PATH)
            .with_children(vec![CatalogNode::directory(LIVE_CATEGORY, LIVE_TITLE)])
    }

    /// Live radio listing, falling back to the static station table
    async fn browse_live(&self, client: &dyn SoundsClient) -> CatalogNode {
        let children = match client.live_stations().await {
            Ok(stations) => {
                let channels = project_stations(&stations);
                if channels.is_empty() {
                    debug!("live station list came back empty, using fallback table");
                    fallback_channels()
                } else {
                    channels
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch live stations, using fallback table");
                fallback_channels()
            }
        };

        CatalogNode::directory(LIVE_CATEGORY, LIVE_TITLE).with_children(children)
    }
}

impl std::fmt::Debug for SoundsMediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundsMediaSource")
            .field("configured", &self.client.is_some())
            .finish()
    }
}

/// Project fetched stations into channel nodes, skipping id-less entries
fn project_stations(stations: &[Station]) -> Vec<CatalogNode> {
    stations
        .iter()
        .filter_map(|station| {
            let id = station.id.as_deref()?;
            let mut node = CatalogNode::channel(
                format!("{LIVE_CATEGORY}/{id}"),
                station.display_name(),
            );
            if let Some(thumbnail) = station.thumbnail() {
                node = node.with_thumbnail(thumbnail);
            }
            Some(node)
        })
        .collect()
}

/// Channel nodes for the static fallback table (no thumbnails)
fn fallback_channels() -> Vec<CatalogNode> {
    FALLBACK_STATIONS
        .iter()
        .map(|(name, id)| CatalogNode::channel(format!("{LIVE_CATEGORY}/{id}"), *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NodeKind;
    use soundsclient::{OnDemandStream, SoundsError, UNKNOWN_STATION_TITLE};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned client driving the source through every interesting path
    #[derive(Debug, Default)]
    struct MockClient {
        stations: Option<Vec<Station>>,
        live_url: Option<String>,
        on_demand_url: Option<String>,
        stream_error: Option<String>,
        calls: AtomicUsize,
    }

    impl MockClient {
        fn io_calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl SoundsClient for MockClient {
        async fn authenticate(&self, _username: &str, _password: &str) -> soundsclient::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn live_stations(&self) -> soundsclient::Result<Vec<Station>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.stations
                .clone()
                .ok_or_else(|| SoundsError::other("station fetch blew up"))
        }

        async fn live_stream_url(
            &self,
            station_id: &str,
            _format: StreamFormat,
        ) -> soundsclient::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(msg) = &self.stream_error {
                return Err(SoundsError::other(msg.clone()));
            }
            self.live_url
                .clone()
                .ok_or_else(|| SoundsError::NoDeliveryToken(station_id.to_string()))
        }

        async fn on_demand_stream(
            &self,
            _content_id: &str,
            _format: StreamFormat,
        ) -> soundsclient::Result<OnDemandStream> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(OnDemandStream {
                url: self.on_demand_url.clone(),
                bitrate: None,
            })
        }
    }

    fn source_with(client: MockClient) -> SoundsMediaSource {
        SoundsMediaSource::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_browse_root_has_single_live_child() {
        let source = source_with(MockClient::default());
        let root = source.browse("").await;

        assert_eq!(root.identifier, "");
        assert_eq!(root.title, SOURCE_NAME);
        assert_eq!(root.thumbnail.as_deref(), Some(LOGO_PATH));
        assert_eq!(root.children.len(), 1);

        let live = &root.children[0];
        assert_eq!(live.identifier, "live");
        assert!(live.expandable);
        assert!(!live.playable);
        // Non-recursive: the live directory is listed, not expanded
        assert!(live.children.is_empty());
    }

    #[tokio::test]
    async fn test_browse_unknown_identifier_degrades_to_root() {
        let source = source_with(MockClient::default());
        let root = source.browse("").await;

        assert_eq!(source.browse("my_sounds").await, root);
        assert_eq!(source.browse("a/b/c").await, root);
    }

    #[tokio::test]
    async fn test_browse_live_projects_fetched_stations() {
        let stations = vec![
            Station {
                id: Some("bbc_radio_fourfm".into()),
                network_short_title: Some("Radio 4".into()),
                network_logo_url: Some("https://example/r4.png".into()),
                ..Default::default()
            },
            // No id: must be skipped
            Station {
                network_short_title: Some("Ghost FM".into()),
                ..Default::default()
            },
            // No titles at all: placeholder name
            Station {
                id: Some("bbc_radio_one".into()),
                image_url: Some("https://example/r1.png".into()),
                ..Default::default()
            },
        ];
        let source = source_with(MockClient {
            stations: Some(stations),
            ..Default::default()
        });

        let live = source.browse("live").await;
        assert_eq!(live.kind, NodeKind::Directory);
        assert_eq!(live.children.len(), 2);

        let four = &live.children[0];
        assert_eq!(four.identifier, "live/bbc_radio_fourfm");
        assert_eq!(four.title, "Radio 4");
        assert_eq!(four.thumbnail.as_deref(), Some("https://example/r4.png"));
        assert!(four.playable);
        assert!(!four.expandable);

        let one = &live.children[1];
        assert_eq!(one.title, UNKNOWN_STATION_TITLE);
        assert_eq!(one.thumbnail.as_deref(), Some("https://example/r1.png"));
    }

    #[tokio::test]
    async fn test_browse_live_falls_back_on_fetch_error() {
        // stations: None makes live_stations fail
        let source = source_with(MockClient::default());

        let live = source.browse("live").await;
        assert_eq!(live.children.len(), FALLBACK_STATIONS.len());
        assert_eq!(live.children[3].identifier, "live/bbc_radio_fourfm");
        assert_eq!(live.children[3].title, "BBC Radio 4");
        assert!(live.children.iter().all(|c| c.playable && !c.expandable));
        assert!(live.children.iter().all(|c| c.thumbnail.is_none()));
    }

    #[tokio::test]
    async fn test_browse_live_falls_back_on_empty_fetch() {
        let source = source_with(MockClient {
            stations: Some(vec![]),
            ..Default::default()
        });

        let live = source.browse("live").await;
        assert_eq!(live.children.len(), FALLBACK_STATIONS.len());
    }

    #[tokio::test]
    async fn test_browse_unconfigured_returns_empty_root() {
        let source = SoundsMediaSource::unconfigured();

        let root = source.browse("").await;
        assert!(!root.expandable);
        assert!(root.children.is_empty());

        // Total over all inputs
        assert_eq!(source.browse("live").await, root);
        assert_eq!(source.browse("live/bbc_radio_one").await, root);
    }

    #[tokio::test]
    async fn test_resolve_live_wraps_hls_mime() {
        let source = source_with(MockClient {
            live_url: Some("https://example/live.m3u8".into()),
            ..Default::default()
        });

        let stream = source.resolve("live/bbc_radio_fourfm").await.unwrap();
        assert_eq!(stream.url, "https://example/live.m3u8");
        assert_eq!(stream.mime_type, MIME_HLS);
    }

    #[tokio::test]
    async fn test_resolve_on_demand_derives_mime() {
        let source = source_with(MockClient {
            on_demand_url: Some("https://example/episode.mp3".into()),
            ..Default::default()
        });

        let stream = source.resolve("ondemand/p0abc123").await.unwrap();
        assert_eq!(stream.mime_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_resolve_on_demand_without_stream_fails() {
        let source = source_with(MockClient::default());

        let err = source.resolve("ondemand/p0abc123").await.unwrap_err();
        match err {
            SourceError::Unresolvable(text) => assert!(text.contains("p0abc123")),
            other => panic!("expected Unresolvable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_malformed_identifier_does_no_io() {
        let client = Arc::new(MockClient::default());
        let source = SoundsMediaSource::new(client.clone());

        for identifier in ["", "live", "live/", "/x", "a/b/c"] {
            let err = source.resolve(identifier).await.unwrap_err();
            assert!(
                matches!(err, SourceError::InvalidIdentifier(_)),
                "{identifier:?} should be rejected as malformed"
            );
        }
        assert_eq!(client.io_calls(), 0);
    }

    #[tokio::test]
    async fn test_resolve_unconfigured_fails_immediately() {
        let source = SoundsMediaSource::unconfigured();
        let err = source.resolve("live/bbc_radio_fourfm").await.unwrap_err();
        assert!(matches!(err, SourceError::NotConfigured));
    }

    #[tokio::test]
    async fn test_resolve_geo_restriction_guidance() {
        // live_url: None makes live_stream_url raise NoDeliveryToken
        let source = source_with(MockClient::default());

        let err = source.resolve("live/bbc_radio_one").await.unwrap_err();
        match err {
            SourceError::Unresolvable(text) => assert!(text.contains("geo-restricted")),
            other => panic!("expected Unresolvable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_auth_guidance_not_combined_with_geo() {
        let source = source_with(MockClient {
            stream_error: Some("HTTP 401 from media selector".into()),
            ..Default::default()
        });

        let err = source.resolve("live/bbc_radio_one").await.unwrap_err();
        match err {
            SourceError::Unresolvable(text) => {
                assert_eq!(text.matches("credentials").count(), 1);
                assert!(text.contains("check your BBC account"));
                assert!(!text.contains("geo-restricted"));
            }
            other => panic!("expected Unresolvable, got {other:?}"),
        }
    }
}

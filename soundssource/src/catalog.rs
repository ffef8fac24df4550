//! Catalog nodes and resolved streams
//!
//! A browse call answers with a [`CatalogNode`] tree built fresh on every
//! call; a resolve call answers with a [`ResolvedStream`]. Neither is ever
//! cached: stream URLs are time-limited by the service.

use serde::{Deserialize, Serialize};

/// MIME type of an HLS playlist (the default for anything unrecognized)
pub const MIME_HLS: &str = "application/vnd.apple.mpegurl";

/// MIME type of an MP3 stream
pub const MIME_MP3: &str = "audio/mpeg";

/// MIME type of a DASH manifest
pub const MIME_DASH: &str = "application/dash+xml";

/// Path under which the embedded logo is served (see `api_rest`)
///
/// Used as the root node thumbnail even when the `server` feature is off,
/// so hosts mounting their own asset route stay compatible.
pub const LOGO_PATH: &str = "/api/sounds/logo";

/// Kind of catalog node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Expandable directory of further nodes
    Directory,
    /// Playable leaf (live station or on-demand item)
    Channel,
}

/// One entry of the browsable catalog
///
/// Invariants: a node is `playable` iff its kind is [`NodeKind::Channel`]
/// and `expandable` iff its kind is [`NodeKind::Directory`]; the single
/// exception is the degraded root built by [`CatalogNode::empty_root`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogNode {
    /// Opaque identifier, `""` for the root
    pub identifier: String,
    /// Title shown in the browsing UI
    pub title: String,
    /// Directory or channel
    pub kind: NodeKind,
    /// Whether the playback pipeline may resolve this node
    pub playable: bool,
    /// Whether the browsing UI may descend into this node
    pub expandable: bool,
    /// Artwork URL, when available
    pub thumbnail: Option<String>,
    /// Ordered child nodes (only populated one level deep)
    pub children: Vec<CatalogNode>,
}

impl CatalogNode {
    /// Create a directory node with no children yet
    pub fn directory(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            kind: NodeKind::Directory,
            playable: false,
            expandable: true,
            thumbnail: None,
            children: Vec::new(),
        }
    }

    /// Create a playable channel node
    pub fn channel(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            kind: NodeKind::Channel,
            playable: true,
            expandable: false,
            thumbnail: None,
            children: Vec::new(),
        }
    }

    /// Create the degraded root returned when no client is configured
    ///
    /// The node is a directory with nothing to descend into, so the UI
    /// shows the source without offering navigation.
    pub fn empty_root(title: impl Into<String>) -> Self {
        Self {
            identifier: String::new(),
            title: title.into(),
            kind: NodeKind::Directory,
            playable: false,
            expandable: false,
            thumbnail: None,
            children: Vec::new(),
        }
    }

    /// Attach a thumbnail URL
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    /// Attach child nodes
    pub fn with_children(mut self, children: Vec<CatalogNode>) -> Self {
        self.children = children;
        self
    }
}

/// A playable stream URL with its MIME type
///
/// Built fresh on every resolve call; the URL may embed a short-lived
/// delivery token and must not be reused across playbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStream {
    /// Playable stream URL
    pub url: String,
    /// MIME type handed to the playback pipeline
    pub mime_type: String,
}

impl ResolvedStream {
    /// Create a resolved stream with an explicit MIME type
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Create a resolved stream, deriving the MIME type from the URL suffix
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let mime_type = mime_for_url(&url).to_string();
        Self { url, mime_type }
    }
}

/// Derive a MIME type from a stream URL suffix
///
/// Unrecognized suffixes default to the HLS playlist type.
pub fn mime_for_url(url: &str) -> &'static str {
    if url.ends_with(".mp3") {
        MIME_MP3
    } else if url.ends_with(".mpd") {
        MIME_DASH
    } else {
        MIME_HLS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_invariants() {
        let dir = CatalogNode::directory("live", "Live Radio");
        assert_eq!(dir.kind, NodeKind::Directory);
        assert!(dir.expandable);
        assert!(!dir.playable);

        let chan = CatalogNode::channel("live/bbc_radio_one", "BBC Radio 1");
        assert_eq!(chan.kind, NodeKind::Channel);
        assert!(chan.playable);
        assert!(!chan.expandable);
    }

    #[test]
    fn test_empty_root_is_not_expandable() {
        let root = CatalogNode::empty_root("BBC Sounds");
        assert_eq!(root.identifier, "");
        assert!(!root.expandable);
        assert!(!root.playable);
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_mime_for_url() {
        assert_eq!(mime_for_url("https://example/stream.mp3"), MIME_MP3);
        assert_eq!(mime_for_url("https://example/manifest.mpd"), MIME_DASH);
        assert_eq!(mime_for_url("https://example/live.m3u8"), MIME_HLS);
        assert_eq!(mime_for_url("https://example/whatever"), MIME_HLS);
    }

    #[test]
    fn test_resolved_stream_from_url() {
        let stream = ResolvedStream::from_url("https://example/episode.mp3");
        assert_eq!(stream.mime_type, MIME_MP3);

        let stream = ResolvedStream::from_url("https://example/live.m3u8");
        assert_eq!(stream.mime_type, MIME_HLS);
    }
}

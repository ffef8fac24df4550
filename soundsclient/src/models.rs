//! Data models shared between BBC Sounds clients and their consumers
//!
//! The structures here are read-only views of what the service returns.
//! Every field the service may omit is an explicit `Option`; consumers use
//! the precedence accessors instead of probing fields themselves.

use serde::{Deserialize, Serialize};

/// Display name used when a station carries no usable title at all
pub const UNKNOWN_STATION_TITLE: &str = "Unknown Station";

/// A live radio station as reported by the BBC Sounds API
///
/// All descriptive fields are optional: the API varies per station and per
/// endpoint. Use [`Station::display_name`] and [`Station::thumbnail`] for
/// the documented fallback order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Station {
    /// Stable station identifier (e.g., "bbc_radio_fourfm")
    pub id: Option<String>,
    /// Short network title (e.g., "Radio 4")
    pub network_short_title: Option<String>,
    /// Primary title of the station entry
    pub primary_title: Option<String>,
    /// Logo URL of the owning network
    pub network_logo_url: Option<String>,
    /// Image URL of the station entry itself
    pub image_url: Option<String>,
}

impl Station {
    /// Create a station with only an id and a short network title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            network_short_title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Human-readable name for the station
    ///
    /// Precedence: network short title, then primary title, then
    /// [`UNKNOWN_STATION_TITLE`].
    pub fn display_name(&self) -> &str {
        self.network_short_title
            .as_deref()
            .or(self.primary_title.as_deref())
            .unwrap_or(UNKNOWN_STATION_TITLE)
    }

    /// Best available artwork URL for the station
    ///
    /// Precedence: network logo, then station image, then none.
    pub fn thumbnail(&self) -> Option<&str> {
        self.network_logo_url
            .as_deref()
            .or(self.image_url.as_deref())
    }
}

/// Transport requested when asking a client for a stream URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamFormat {
    /// Adaptive HLS playlist (preferred)
    Hls,
    /// MPEG-DASH manifest
    Dash,
    /// Plain MP3 stream
    Mp3,
}

impl StreamFormat {
    /// Wire name of the format as the BBC media selector expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hls => "hls",
            Self::Dash => "dash",
            Self::Mp3 => "mp3",
        }
    }
}

impl std::fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stream descriptor returned for an on-demand item
///
/// `url` may be absent when the item exists in the catalogue but carries no
/// playable media (expired availability window, for example).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnDemandStream {
    /// Playable stream URL, when available
    pub url: Option<String>,
    /// Bitrate in kbps, when reported
    pub bitrate: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_precedence() {
        let full = Station {
            id: Some("bbc_radio_two".into()),
            network_short_title: Some("Radio 2".into()),
            primary_title: Some("BBC Radio 2".into()),
            ..Default::default()
        };
        assert_eq!(full.display_name(), "Radio 2");

        let primary_only = Station {
            id: Some("bbc_radio_two".into()),
            primary_title: Some("BBC Radio 2".into()),
            ..Default::default()
        };
        assert_eq!(primary_only.display_name(), "BBC Radio 2");

        let bare = Station {
            id: Some("bbc_radio_two".into()),
            ..Default::default()
        };
        assert_eq!(bare.display_name(), UNKNOWN_STATION_TITLE);
    }

    #[test]
    fn test_thumbnail_precedence() {
        let both = Station {
            network_logo_url: Some("https://example/network.png".into()),
            image_url: Some("https://example/station.png".into()),
            ..Default::default()
        };
        assert_eq!(both.thumbnail(), Some("https://example/network.png"));

        let image_only = Station {
            image_url: Some("https://example/station.png".into()),
            ..Default::default()
        };
        assert_eq!(image_only.thumbnail(), Some("https://example/station.png"));

        assert_eq!(Station::default().thumbnail(), None);
    }

    #[test]
    fn test_stream_format_wire_names() {
        assert_eq!(StreamFormat::Hls.as_str(), "hls");
        assert_eq!(StreamFormat::Dash.as_str(), "dash");
        assert_eq!(StreamFormat::Mp3.to_string(), "mp3");
    }
}

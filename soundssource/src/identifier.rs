//! Media identifier parsing
//!
//! Identifiers are opaque strings handed back to us by the browsing UI and
//! the playback pipeline. The wire format is `"<category>/<id>"` for leaves
//! and `""` or `"<category>"` for directories. Changing category names or
//! id formats breaks saved favourites, so the format is parsed in exactly
//! one place.

/// A parsed media identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaId<'a> {
    /// The empty identifier, root of the catalog
    Root,
    /// A directory identifier without a separator (e.g., "live")
    Category(&'a str),
    /// A leaf identifier, exactly one separator (e.g., "live/bbc_radio_fourfm")
    Item {
        /// Category half (e.g., "live")
        category: &'a str,
        /// Item half (e.g., "bbc_radio_fourfm")
        id: &'a str,
    },
    /// Anything else: empty halves or more than one separator
    Malformed(&'a str),
}

impl<'a> MediaId<'a> {
    /// Parse an identifier string
    ///
    /// Never fails; malformed input yields [`MediaId::Malformed`] so the
    /// caller decides whether to degrade (browse) or reject (resolve).
    ///
    /// # Examples
    ///
    /// ```
    /// use soundssource::MediaId;
    ///
    /// assert_eq!(MediaId::parse(""), MediaId::Root);
    /// assert_eq!(MediaId::parse("live"), MediaId::Category("live"));
    /// assert_eq!(
    ///     MediaId::parse("live/bbc_radio_fourfm"),
    ///     MediaId::Item { category: "live", id: "bbc_radio_fourfm" }
    /// );
    /// ```
    pub fn parse(identifier: &'a str) -> Self {
        if identifier.is_empty() {
            return Self::Root;
        }
        match identifier.split_once('/') {
            None => Self::Category(identifier),
            Some((category, id)) if !category.is_empty() && !id.is_empty() && !id.contains('/') => {
                Self::Item { category, id }
            }
            Some(_) => Self::Malformed(identifier),
        }
    }

    /// Category and id halves, when this is a well-formed leaf identifier
    pub fn item(&self) -> Option<(&'a str, &'a str)> {
        match self {
            Self::Item { category, id } => Some((category, id)),
            _ => None,
        }
    }
}

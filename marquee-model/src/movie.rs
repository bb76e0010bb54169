use std::fmt::{self, Display, Formatter};

/// Provider convention for "no poster available".
pub const POSTER_NOT_AVAILABLE: &str = "N/A";

/// Catalog entry type as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MediaKind {
    #[default]
    Movie,
    Series,
    Episode,
    Game,
    Other(String),
}

impl MediaKind {
    /// Case-insensitive mapping from the provider's `Type` field.
    pub fn from_provider(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "movie" => MediaKind::Movie,
            "series" => MediaKind::Series,
            "episode" => MediaKind::Episode,
            "game" => MediaKind::Game,
            _ => MediaKind::Other(raw.trim().to_string()),
        }
    }

    pub fn is_series(&self) -> bool {
        matches!(self, MediaKind::Series)
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Series => write!(f, "series"),
            MediaKind::Episode => write!(f, "episode"),
            MediaKind::Game => write!(f, "game"),
            MediaKind::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// A fully resolved catalog entry.
///
/// Immutable once built. The resolver hands these out as `Arc<MovieRecord>` so
/// the lookup cache and every row that resolved the same term share one
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieRecord {
    /// External identifier (IMDb id, e.g. `tt0133093`).
    pub imdb_id: String,
    pub title: String,
    /// Release year or year range (`"2017–2021"` for series).
    pub year: Option<String>,
    pub kind: MediaKind,
    /// Poster URL. `Some("N/A")` is the provider's explicit "not available".
    pub poster: Option<String>,
    /// Numeric rating string out of ten, e.g. `"8.7"`.
    pub rating: Option<String>,
    /// Vote count as reported, e.g. `"1,234,567"`.
    pub votes: Option<String>,
}

impl MovieRecord {
    /// True when the poster is present, non-empty and not the sentinel.
    pub fn has_poster(&self) -> bool {
        self.poster_url().is_some()
    }

    /// The poster URL when it is usable.
    pub fn poster_url(&self) -> Option<&str> {
        self.poster
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != POSTER_NOT_AVAILABLE)
    }
}

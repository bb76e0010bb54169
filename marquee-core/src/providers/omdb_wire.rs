//! Wire shapes of the OMDb JSON API.

use marquee_model::{MediaKind, MovieRecord};
use serde::{Deserialize, Serialize};

use super::catalog::SearchHit;

/// OMDb marks missing scalar fields with this literal.
const NOT_AVAILABLE: &str = "N/A";

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty() && raw != NOT_AVAILABLE)
}

fn response_ok(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("true")
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    /// Hits in provider order; empty unless the response reports success.
    pub fn into_hits(self) -> Vec<SearchHit> {
        if !response_ok(&self.response) {
            return Vec::new();
        }
        self.search
            .into_iter()
            .filter(|item| !item.imdb_id.trim().is_empty())
            .map(OmdbSearchItem::into_hit)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

impl OmdbSearchItem {
    fn into_hit(self) -> SearchHit {
        SearchHit {
            imdb_id: self.imdb_id,
            title: self.title,
            year: present(self.year),
            kind: MediaKind::from_provider(self.kind.as_deref().unwrap_or_default()),
            poster: self.poster,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbDetailResponse {
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub rating: Option<String>,
    #[serde(rename = "imdbVotes", default)]
    pub votes: Option<String>,
}

impl OmdbDetailResponse {
    /// The record when the response reports success.
    ///
    /// The poster keeps the `"N/A"` sentinel so callers can tell "no poster"
    /// apart from "field missing"; scalar fields drop it.
    pub fn into_record(self, requested_id: &str) -> Option<MovieRecord> {
        if !response_ok(&self.response) {
            return None;
        }
        Some(MovieRecord {
            imdb_id: present(self.imdb_id)
                .unwrap_or_else(|| requested_id.to_string()),
            title: self.title.unwrap_or_default(),
            year: present(self.year),
            kind: MediaKind::from_provider(self.kind.as_deref().unwrap_or_default()),
            poster: self.poster,
            rating: present(self.rating),
            votes: present(self.votes),
        })
    }
}

/// Query string for `?s=`.
#[derive(Debug, Clone, Serialize)]
pub struct OmdbSearchQuery<'a> {
    #[serde(rename = "s")]
    pub query: &'a str,
    #[serde(rename = "apikey")]
    pub api_key: &'a str,
}

/// Query string for `?i=`.
#[derive(Debug, Clone, Serialize)]
pub struct OmdbDetailQuery<'a> {
    #[serde(rename = "i")]
    pub imdb_id: &'a str,
    #[serde(rename = "apikey")]
    pub api_key: &'a str,
}

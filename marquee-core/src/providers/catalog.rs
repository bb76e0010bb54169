use std::fmt;

use async_trait::async_trait;
use marquee_model::{MediaKind, MovieRecord};

use crate::error::ProviderError;

/// One candidate from a free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub imdb_id: String,
    pub title: String,
    pub year: Option<String>,
    pub kind: MediaKind,
    pub poster: Option<String>,
}

/// Remote catalog the resolver talks to.
///
/// Implementations report "no match" as `Ok` with an empty list or `None`,
/// and transport or decoding trouble as `Err`. The resolver treats both the
/// same way, so implementations don't need to be clever about the split.
#[async_trait]
pub trait CatalogClient: Send + Sync + fmt::Debug {
    /// Free-text search. Results keep provider order.
    async fn search(&self, query: &str)
    -> Result<Vec<SearchHit>, ProviderError>;

    /// Full record for a provider identifier.
    async fn detail(
        &self,
        imdb_id: &str,
    ) -> Result<Option<MovieRecord>, ProviderError>;
}

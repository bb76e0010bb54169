use std::sync::Arc;

use marquee_model::{MovieRecord, SearchTerm};
use tracing::{debug, warn};

use crate::{
    cache::LookupCache, error::ProviderError, providers::CatalogClient,
};

/// Counters for one resolver session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    pub cache_hits: usize,
    pub resolved: usize,
    pub unresolved: usize,
}

/// Turns search terms into full records: search, take the first hit, fetch
/// its detail.
///
/// Owns the [`LookupCache`] for its session, so two resolvers never share
/// state. Resolution is strictly sequential (`&mut self`).
#[derive(Debug)]
pub struct MovieResolver {
    client: Arc<dyn CatalogClient>,
    cache: LookupCache,
    stats: ResolverStats,
}

impl MovieResolver {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            client,
            cache: LookupCache::new(),
            stats: ResolverStats::default(),
        }
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    pub fn stats(&self) -> ResolverStats {
        self.stats
    }

    /// Resolve `term` to a record, or `None` when anything along the way fails.
    ///
    /// Cache hits cost no remote call. Misses cost up to two (search, then
    /// detail). Only full successes are cached; failures are retried on the
    /// next call for the same term. Errors are logged, never returned.
    pub async fn resolve(
        &mut self,
        term: &SearchTerm,
    ) -> Option<Arc<MovieRecord>> {
        if let Some(record) = self.cache.get(term) {
            self.stats.cache_hits += 1;
            debug!(term = %term, imdb_id = %record.imdb_id, "lookup cache hit");
            return Some(record);
        }

        if term.is_blank() {
            self.stats.unresolved += 1;
            debug!("skipping blank search term");
            return None;
        }

        match self.lookup(term).await {
            Ok(Some(record)) => {
                let record = Arc::new(record);
                self.cache.put(term, Arc::clone(&record));
                self.stats.resolved += 1;
                debug!(term = %term, imdb_id = %record.imdb_id, "resolved search term");
                Some(record)
            }
            Ok(None) => {
                self.stats.unresolved += 1;
                debug!(term = %term, "no catalog match");
                None
            }
            Err(err) => {
                self.stats.unresolved += 1;
                warn!(term = %term, error = %err, "catalog lookup failed");
                None
            }
        }
    }

    async fn lookup(
        &self,
        term: &SearchTerm,
    ) -> Result<Option<MovieRecord>, ProviderError> {
        let hits = self.client.search(term.as_str()).await?;
        // First hit wins; no ranking.
        let Some(first) = hits.into_iter().next() else {
            return Ok(None);
        };

        self.client.detail(&first.imdb_id).await
    }
}

use std::{collections::HashMap, sync::Arc};

use marquee_model::{MovieRecord, SearchTerm};

/// Memoizes successful resolutions for the lifetime of one session.
///
/// Keys are [`SearchTerm::cache_key`] values, so `"Dune"` and `" dune "` share
/// an entry. Only successes are stored: a term that failed is looked up again
/// the next time it is asked for. No eviction and no expiry; the set of terms
/// is fixed by configuration.
#[derive(Debug, Default, Clone)]
pub struct LookupCache {
    entries: HashMap<String, Arc<MovieRecord>>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &SearchTerm) -> Option<Arc<MovieRecord>> {
        self.entries.get(&term.cache_key()).cloned()
    }

    /// Stores `record` under `term`, silently replacing an earlier entry.
    pub fn put(&mut self, term: &SearchTerm, record: Arc<MovieRecord>) {
        self.entries.insert(term.cache_key(), record);
    }

    pub fn contains(&self, term: &SearchTerm) -> bool {
        self.entries.contains_key(&term.cache_key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

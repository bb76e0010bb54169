//! Scripted catalog used by the integration tests.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use marquee_core::{
    ProviderError,
    providers::{CatalogClient, SearchHit},
};
use marquee_model::{MediaKind, MovieRecord, RowSpec};

pub fn poster_for(imdb_id: &str) -> String {
    format!("https://m.media-amazon.com/images/M/{imdb_id}._V1_SX300.jpg")
}

pub fn movie(imdb_id: &str, title: &str) -> MovieRecord {
    MovieRecord {
        imdb_id: imdb_id.to_string(),
        title: title.to_string(),
        year: Some("2001".to_string()),
        kind: MediaKind::Movie,
        poster: Some(poster_for(imdb_id)),
        rating: Some("7.5".to_string()),
        votes: Some("1,234,567".to_string()),
    }
}

#[derive(Debug, Clone)]
enum SearchScript {
    Hits(Vec<String>),
    Fail,
    Panic,
}

#[derive(Debug, Clone)]
enum DetailScript {
    Record(MovieRecord),
    Missing,
    Fail,
}

/// Fake catalog with canned answers and a call log.
///
/// Search queries are matched case-insensitively after trimming. Unknown
/// queries behave like "no results".
#[derive(Debug, Default)]
pub struct ScriptedCatalog {
    searches: HashMap<String, SearchScript>,
    details: HashMap<String, DetailScript>,
    calls: Mutex<Vec<String>>,
}

fn key(query: &str) -> String {
    query.trim().to_lowercase()
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// `term` resolves to `record` through a single search hit.
    pub fn with_movie(mut self, term: &str, record: MovieRecord) -> Self {
        let id = record.imdb_id.clone();
        self.searches
            .insert(key(term), SearchScript::Hits(vec![id.clone()]));
        self.details.insert(id, DetailScript::Record(record));
        self
    }

    /// `term` returns several hits; only the first should ever be detailed.
    pub fn with_hits(mut self, term: &str, records: Vec<MovieRecord>) -> Self {
        let ids = records.iter().map(|r| r.imdb_id.clone()).collect();
        self.searches.insert(key(term), SearchScript::Hits(ids));
        for record in records {
            self.details
                .insert(record.imdb_id.clone(), DetailScript::Record(record));
        }
        self
    }

    pub fn with_search_failure(mut self, term: &str) -> Self {
        self.searches.insert(key(term), SearchScript::Fail);
        self
    }

    pub fn with_search_panic(mut self, term: &str) -> Self {
        self.searches.insert(key(term), SearchScript::Panic);
        self
    }

    /// Search finds `imdb_id`, but its detail lookup reports failure.
    pub fn with_missing_detail(mut self, term: &str, imdb_id: &str) -> Self {
        self.searches
            .insert(key(term), SearchScript::Hits(vec![imdb_id.to_string()]));
        self.details.insert(imdb_id.to_string(), DetailScript::Missing);
        self
    }

    /// Search finds `imdb_id`, but its detail lookup errors at transport level.
    pub fn with_detail_failure(mut self, term: &str, imdb_id: &str) -> Self {
        self.searches
            .insert(key(term), SearchScript::Hits(vec![imdb_id.to_string()]));
        self.details.insert(imdb_id.to_string(), DetailScript::Fail);
        self
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log").clone()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().expect("call log").len()
    }

    pub fn search_calls(&self, term: &str) -> usize {
        let wanted = format!("search:{}", key(term));
        self.calls().iter().filter(|call| **call == wanted).count()
    }

    pub fn detail_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with("detail:"))
            .count()
    }

    fn record_call(&self, call: String) {
        self.calls.lock().expect("call log").push(call);
    }
}

#[async_trait]
impl CatalogClient for ScriptedCatalog {
    async fn search(
        &self,
        query: &str,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        self.record_call(format!("search:{}", key(query)));

        match self.searches.get(&key(query)) {
            None => Ok(Vec::new()),
            Some(SearchScript::Fail) => Err(ProviderError::ApiError(
                "connection reset by peer".to_string(),
            )),
            Some(SearchScript::Panic) => {
                panic!("transport blew up while searching {query}")
            }
            Some(SearchScript::Hits(ids)) => Ok(ids
                .iter()
                .map(|id| SearchHit {
                    imdb_id: id.clone(),
                    title: id.clone(),
                    year: None,
                    kind: MediaKind::Movie,
                    poster: Some(poster_for(id)),
                })
                .collect()),
        }
    }

    async fn detail(
        &self,
        imdb_id: &str,
    ) -> Result<Option<MovieRecord>, ProviderError> {
        self.record_call(format!("detail:{imdb_id}"));

        match self.details.get(imdb_id) {
            Some(DetailScript::Record(record)) => Ok(Some(record.clone())),
            Some(DetailScript::Fail) => {
                Err(ProviderError::ParseError("unexpected end of input".into()))
            }
            Some(DetailScript::Missing) | None => Ok(None),
        }
    }
}

/// `count` distinct titles: `"term-00"` resolves to `tt0000000`, and so on.
pub fn numbered_catalog(count: usize) -> (ScriptedCatalog, Vec<String>) {
    let mut catalog = ScriptedCatalog::new();
    let mut terms = Vec::with_capacity(count);
    for n in 0..count {
        let term = format!("term-{n:02}");
        catalog = catalog
            .with_movie(&term, movie(&format!("tt{n:07}"), &format!("Title {n}")));
        terms.push(term);
    }
    (catalog, terms)
}

pub fn row(id: &str, terms: &[&str]) -> RowSpec {
    RowSpec::new(id, id.to_uppercase(), terms.iter().copied())
}

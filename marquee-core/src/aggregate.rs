use std::{any::Any, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use marquee_model::{
    FAILED_ROW_MESSAGE, HeroModel, HomeLayout, LayoutRow, ResolvedRow, RowSpec,
    RowState, SearchTerm,
};
use tracing::{error, info};

use crate::{
    error::{AggregateError, ObserverError},
    hero::select_hero,
    providers::CatalogClient,
    resolver::MovieResolver,
    rows::build_row,
};

/// Receives updates while an aggregation pass runs, so a page can paint the
/// hero and each row as soon as they are ready.
///
/// Calls arrive in configuration order. A `row_ready` error aborts the rest of
/// the pass: rows still loading are then reported failed.
pub trait AggregationObserver: Send {
    fn hero_ready(&mut self, _hero: &HeroModel) {}

    fn row_ready(&mut self, _row: &LayoutRow) -> Result<(), ObserverError> {
        Ok(())
    }

    /// The pass stopped early; `pending` are the rows that never finished.
    fn aggregation_failed(
        &mut self,
        _error: &AggregateError,
        _pending: &[LayoutRow],
    ) {
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AggregationObserver for NoopObserver {}

/// Everything one pass needs: hero terms and the configured rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRequest {
    pub hero_primary: SearchTerm,
    pub hero_fallback: SearchTerm,
    pub rows: Vec<RowSpec>,
}

impl AggregateRequest {
    pub fn new(
        hero_primary: impl Into<SearchTerm>,
        hero_fallback: impl Into<SearchTerm>,
        rows: Vec<RowSpec>,
    ) -> Self {
        Self {
            hero_primary: hero_primary.into(),
            hero_fallback: hero_fallback.into(),
            rows,
        }
    }
}

/// Drives the hero and every row through one [`MovieResolver`].
///
/// Strictly sequential: hero first, then rows in configuration order, one
/// term at a time. Each row is isolated, so a row that blows up mid-way is
/// marked failed and the next row still runs.
#[derive(Debug)]
pub struct Aggregator {
    resolver: MovieResolver,
    row_cap: usize,
}

impl Aggregator {
    pub fn new(client: Arc<dyn CatalogClient>, row_cap: usize) -> Self {
        Self::with_resolver(MovieResolver::new(client), row_cap)
    }

    pub fn with_resolver(resolver: MovieResolver, row_cap: usize) -> Self {
        Self { resolver, row_cap }
    }

    pub fn resolver(&self) -> &MovieResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut MovieResolver {
        &mut self.resolver
    }

    pub fn row_cap(&self) -> usize {
        self.row_cap
    }

    pub async fn aggregate(
        &mut self,
        request: &AggregateRequest,
        observer: &mut dyn AggregationObserver,
    ) -> HomeLayout {
        let hero = self.resolve_hero(request).await;
        if let Some(hero) = hero.as_ref() {
            observer.hero_ready(hero);
        }

        let mut layout = HomeLayout {
            hero,
            rows: request
                .rows
                .iter()
                .map(|spec| LayoutRow {
                    id: spec.id.clone(),
                    label: spec.label.clone(),
                    state: RowState::Loading,
                })
                .collect(),
        };

        if let Err(err) = self.fill_rows(request, &mut layout, observer).await {
            error!(error = %err, "error loading movies");
            let pending: Vec<LayoutRow> = layout
                .rows
                .iter_mut()
                .filter(|row| row.state.is_loading())
                .map(|row| {
                    row.state = RowState::failed(FAILED_ROW_MESSAGE);
                    row.clone()
                })
                .collect();
            observer.aggregation_failed(&err, &pending);
        }

        let stats = self.resolver.stats();
        info!(
            rows = layout.rows.len(),
            failed_rows = layout.failed_rows(),
            hero = layout.hero.is_some(),
            resolved = stats.resolved,
            cache_hits = stats.cache_hits,
            unresolved = stats.unresolved,
            "aggregation finished"
        );

        layout
    }

    async fn resolve_hero(
        &mut self,
        request: &AggregateRequest,
    ) -> Option<HeroModel> {
        let attempt = AssertUnwindSafe(select_hero(
            &mut self.resolver,
            &request.hero_primary,
            &request.hero_fallback,
        ))
        .catch_unwind()
        .await;

        match attempt {
            Ok(hero) => hero,
            Err(panic) => {
                let err = AggregateError::HeroAborted(panic_message(&*panic));
                error!(error = %err, "hero resolution failed");
                None
            }
        }
    }

    async fn fill_rows(
        &mut self,
        request: &AggregateRequest,
        layout: &mut HomeLayout,
        observer: &mut dyn AggregationObserver,
    ) -> Result<(), AggregateError> {
        for (spec, slot) in request.rows.iter().zip(layout.rows.iter_mut()) {
            slot.state = self.build_row_isolated(spec).await;
            observer.row_ready(slot)?;
        }
        Ok(())
    }

    async fn build_row_isolated(&mut self, spec: &RowSpec) -> RowState {
        let attempt = AssertUnwindSafe(build_row(
            &mut self.resolver,
            &spec.searches,
            self.row_cap,
        ))
        .catch_unwind()
        .await;

        match attempt {
            Ok(movies) => {
                info!(row = %spec.id, kept = movies.len(), terms = spec.searches.len(), "row resolved");
                RowState::Ready(ResolvedRow::new(spec.id.clone(), movies))
            }
            Err(panic) => {
                let err = AggregateError::RowAborted {
                    row: spec.id.to_string(),
                    message: panic_message(&*panic),
                };
                error!(row = %spec.id, error = %err, "row failed");
                RowState::failed(FAILED_ROW_MESSAGE)
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    }
}

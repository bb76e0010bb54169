//! Resolution: first hit wins, successes are memoized, failures are not.

mod support;

use std::sync::Arc;

use marquee_core::MovieResolver;
use marquee_model::SearchTerm;
use support::{ScriptedCatalog, movie};

#[tokio::test]
async fn second_resolve_hits_cache_without_remote_calls() {
    let catalog = ScriptedCatalog::new()
        .with_movie("inception", movie("tt1375666", "Inception"))
        .into_shared();
    let mut resolver = MovieResolver::new(catalog.clone());
    let term = SearchTerm::new("inception");

    let first = resolver.resolve(&term).await.expect("first resolve");
    assert_eq!(catalog.total_calls(), 2);

    let second = resolver.resolve(&term).await.expect("second resolve");
    assert_eq!(catalog.total_calls(), 2, "cache hit must not touch the network");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(resolver.stats().cache_hits, 1);
}

#[tokio::test]
async fn normalised_terms_share_one_resolution() {
    let catalog = ScriptedCatalog::new()
        .with_movie("fight club", movie("tt0137523", "Fight Club"))
        .into_shared();
    let mut resolver = MovieResolver::new(catalog.clone());

    resolver
        .resolve(&SearchTerm::new("Fight Club"))
        .await
        .expect("resolves");
    resolver
        .resolve(&SearchTerm::new("  fight   club "))
        .await
        .expect("cached");

    assert_eq!(catalog.search_calls("fight club"), 1);
}

#[tokio::test]
async fn only_first_search_hit_is_detailed() {
    let catalog = ScriptedCatalog::new()
        .with_hits(
            "matrix",
            vec![
                movie("tt0133093", "The Matrix"),
                movie("tt0234215", "The Matrix Reloaded"),
            ],
        )
        .into_shared();
    let mut resolver = MovieResolver::new(catalog.clone());

    let record = resolver
        .resolve(&SearchTerm::new("matrix"))
        .await
        .expect("resolves");

    assert_eq!(record.imdb_id, "tt0133093");
    assert_eq!(catalog.calls(), ["search:matrix", "detail:tt0133093"]);
}

#[tokio::test]
async fn no_results_resolve_to_none_and_are_retried() {
    let catalog = ScriptedCatalog::new().into_shared();
    let mut resolver = MovieResolver::new(catalog.clone());
    let term = SearchTerm::new("zzzz-not-a-movie");

    assert!(resolver.resolve(&term).await.is_none());
    assert!(resolver.resolve(&term).await.is_none());

    assert_eq!(catalog.search_calls("zzzz-not-a-movie"), 2);
    assert!(resolver.cache().is_empty());
    assert_eq!(resolver.stats().unresolved, 2);
}

#[tokio::test]
async fn transport_failures_are_swallowed_and_not_cached() {
    let catalog = ScriptedCatalog::new()
        .with_search_failure("avengers")
        .with_detail_failure("titanic", "tt0120338")
        .into_shared();
    let mut resolver = MovieResolver::new(catalog.clone());

    assert!(resolver.resolve(&SearchTerm::new("avengers")).await.is_none());
    assert!(resolver.resolve(&SearchTerm::new("titanic")).await.is_none());
    assert!(resolver.resolve(&SearchTerm::new("titanic")).await.is_none());

    assert_eq!(catalog.search_calls("titanic"), 2);
    assert!(resolver.cache().is_empty());
}

#[tokio::test]
async fn failed_detail_status_resolves_to_none() {
    let catalog = ScriptedCatalog::new()
        .with_missing_detail("godfather", "tt0068646")
        .into_shared();
    let mut resolver = MovieResolver::new(catalog.clone());

    assert!(resolver.resolve(&SearchTerm::new("godfather")).await.is_none());
    assert_eq!(catalog.detail_calls(), 1);
}

#[tokio::test]
async fn blank_terms_never_reach_the_catalog() {
    let catalog = ScriptedCatalog::new().into_shared();
    let mut resolver = MovieResolver::new(catalog.clone());

    assert!(resolver.resolve(&SearchTerm::new("   ")).await.is_none());
    assert_eq!(catalog.total_calls(), 0);
}

#[tokio::test]
async fn sessions_do_not_share_caches() {
    let catalog = ScriptedCatalog::new()
        .with_movie("dune", movie("tt1160419", "Dune"))
        .into_shared();
    let term = SearchTerm::new("dune");

    let mut first = MovieResolver::new(catalog.clone());
    first.resolve(&term).await.expect("resolves");

    let mut second = MovieResolver::new(catalog.clone());
    second.resolve(&term).await.expect("resolves");

    assert_eq!(catalog.search_calls("dune"), 2);
}

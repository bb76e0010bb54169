//! # Marquee Core
//!
//! Catalog aggregation and caching layer behind the Marquee home page.
//!
//! ## Overview
//!
//! Given a hero search term (with a fallback) and a list of configured rows,
//! each with an ordered list of search terms, `marquee-core` produces:
//!
//! - **Rows**: per row, the first N records (N = row cap) whose search term
//!   resolved and which carry a usable poster, in search-term order
//! - **Hero**: a display model for the featured record
//!
//! Resolution is a two-step remote lookup (free-text search, then detail by
//! id) memoized per session. Failures never propagate out of the resolver;
//! they shrink rows instead.
//!
//! ## Architecture
//!
//! - [`poster`]: high-resolution poster URL rewriting
//! - [`cache`]: session-scoped memoization of successful lookups
//! - [`resolver`]: search term → record, through [`providers::CatalogClient`]
//! - [`rows`]: capped, order-preserving row construction
//! - [`hero`]: hero selection with fallback and display derivation
//! - [`aggregate`]: the orchestrated pass over hero and rows
//! - [`providers`]: the catalog seam and its OMDb implementation
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use marquee_core::{
//!     aggregate::{AggregateRequest, Aggregator, NoopObserver},
//!     providers::{OmdbApiProvider, OmdbSettings},
//! };
//! use marquee_model::RowSpec;
//!
//! async fn home_page() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = OmdbApiProvider::new(OmdbSettings::from_env()?)?;
//!     let mut aggregator = Aggregator::new(Arc::new(provider), 10);
//!
//!     let request = AggregateRequest::new(
//!         "money heist",
//!         "avengers",
//!         vec![RowSpec::new("drama-movies", "Drama", ["drama", "oscar"])],
//!     );
//!
//!     let layout = aggregator.aggregate(&request, &mut NoopObserver).await;
//!     println!("{} rows", layout.rows.len());
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Orchestrated aggregation pass (hero, then rows in configuration order)
pub mod aggregate;

/// Session-scoped lookup cache
pub mod cache;

/// Error types shared by the core
pub mod error;

/// Hero selection and display derivation
pub mod hero;

/// Poster URL enhancement
pub mod poster;

/// Remote catalog seam and the OMDb provider
pub mod providers;

/// Search term resolution
pub mod resolver;

/// Row construction
pub mod rows;

pub use aggregate::{AggregateRequest, AggregationObserver, Aggregator};
pub use cache::LookupCache;
pub use error::{AggregateError, ObserverError, ProviderError};
pub use hero::{hero_from_record, select_hero};
pub use poster::{hi_res_poster, hi_res_poster_url};
pub use resolver::{MovieResolver, ResolverStats};
pub use rows::build_row;

pub use marquee_model as model;

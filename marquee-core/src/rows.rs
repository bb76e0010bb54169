use std::sync::Arc;

use marquee_model::{MovieRecord, SearchTerm};
use tracing::debug;

use crate::resolver::MovieResolver;

/// Default number of records kept per row.
pub const DEFAULT_ROW_CAP: usize = 10;

/// Resolve `terms` in order and keep the records that have a usable poster.
///
/// Stops resolving as soon as `cap` records are kept, so trailing terms cost
/// nothing once the row is full. The result is a sub-sequence of the term
/// order with unresolved or posterless entries dropped, never padded.
pub async fn build_row(
    resolver: &mut MovieResolver,
    terms: &[SearchTerm],
    cap: usize,
) -> Vec<Arc<MovieRecord>> {
    let mut movies = Vec::with_capacity(cap.min(terms.len()));

    for term in terms {
        if movies.len() >= cap {
            break;
        }

        match resolver.resolve(term).await {
            Some(record) if record.has_poster() => movies.push(record),
            Some(record) => {
                debug!(term = %term, imdb_id = %record.imdb_id, "dropping record without poster");
            }
            None => {}
        }
    }

    movies
}

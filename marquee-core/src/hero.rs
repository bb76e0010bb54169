use std::sync::Arc;

use marquee_model::{HeroBadge, HeroModel, MovieRecord, SearchTerm};
use tracing::{debug, info};

use crate::{poster::hi_res_poster, resolver::MovieResolver};

/// Title shown when the record has none.
pub const PLACEHOLDER_TITLE: &str = "Movie Title";

/// Resolve `primary`, falling back to `fallback`, and derive the hero.
///
/// `None` when both fail; the caller keeps whatever hero it showed before.
pub async fn select_hero(
    resolver: &mut MovieResolver,
    primary: &SearchTerm,
    fallback: &SearchTerm,
) -> Option<HeroModel> {
    let record = match resolver.resolve(primary).await {
        Some(record) => record,
        None => {
            debug!(primary = %primary, fallback = %fallback, "hero primary unresolved, trying fallback");
            resolver.resolve(fallback).await?
        }
    };

    info!(title = %record.title, imdb_id = %record.imdb_id, "hero selected");
    Some(hero_from_record(record))
}

/// Display model for `record` as the hero.
///
/// Pure; also used when the presentation layer promotes a row card to hero.
pub fn hero_from_record(record: Arc<MovieRecord>) -> HeroModel {
    let badge = if record.kind.is_series() {
        HeroBadge::Series
    } else {
        HeroBadge::Film
    };

    let title = if record.title.trim().is_empty() {
        PLACEHOLDER_TITLE
    } else {
        record.title.as_str()
    };
    let (title_lead, title_highlight) = split_title(title);

    HeroModel {
        badge,
        title_lead,
        title_highlight,
        period: non_empty(record.year.as_deref())
            .map(str::to_string)
            .unwrap_or_default(),
        rating: non_empty(record.rating.as_deref())
            .map(|rating| format!("{rating}/10"))
            .unwrap_or_default(),
        votes: format_votes(record.votes.as_deref()),
        background: hi_res_poster(&record),
        record,
    }
}

/// `"The Matrix"` → `("The ", "Matrix")`; `"Interstellar"` →
/// `("Interstellar", "")`.
pub fn split_title(title: &str) -> (String, String) {
    let words: Vec<&str> = title.split_whitespace().collect();
    match words.split_last() {
        Some((last, lead)) if !lead.is_empty() => {
            (format!("{} ", lead.join(" ")), (*last).to_string())
        }
        _ => (title.to_string(), String::new()),
    }
}

/// `"1234567"` → `"1.2M votes"`. Thousands separators are accepted; anything
/// else that does not parse as an integer renders as `""`.
pub fn format_votes(votes: Option<&str>) -> String {
    let Some(raw) = non_empty(votes) else {
        return String::new();
    };

    let digits: String = raw.chars().filter(|ch| !matches!(ch, ',' | '_')).collect();
    match digits.parse::<i64>() {
        Ok(count) => format!("{:.1}M votes", count as f64 / 1_000_000.0),
        Err(_) => String::new(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

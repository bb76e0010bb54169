use std::{fmt, sync::Arc};

use crate::{movie::MovieRecord, search_term::SearchTerm};

/// Shown for a row that resolved successfully but kept no records.
pub const EMPTY_ROW_MESSAGE: &str = "No movies found";

/// Shown for a row whose resolution failed.
pub const FAILED_ROW_MESSAGE: &str =
    "Failed to load movies. Please try again later.";

/// Stable identifier of a configured row (e.g. `"popular-movies"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Static definition of one home-page row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSpec {
    pub id: RowId,
    pub label: String,
    /// Ordered; earlier terms win the available slots.
    pub searches: Vec<SearchTerm>,
}

impl RowSpec {
    pub fn new<I, T>(id: impl Into<String>, label: impl Into<String>, searches: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SearchTerm>,
    {
        Self {
            id: RowId::new(id),
            label: label.into(),
            searches: searches.into_iter().map(Into::into).collect(),
        }
    }
}

/// Records kept for one row, in search-term order, without gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedRow {
    pub id: RowId,
    pub movies: Vec<Arc<MovieRecord>>,
}

impl ResolvedRow {
    pub fn new(id: RowId, movies: Vec<Arc<MovieRecord>>) -> Self {
        Self { id, movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Lifecycle of a row as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum RowState {
    Loading,
    Ready(ResolvedRow),
    Failed { message: String },
}

impl RowState {
    pub fn failed(message: impl Into<String>) -> Self {
        RowState::Failed {
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RowState::Loading)
    }

    pub fn resolved(&self) -> Option<&ResolvedRow> {
        match self {
            RowState::Ready(row) => Some(row),
            _ => None,
        }
    }

    /// Explicit empty/error text for states that render no cards.
    pub fn display_message(&self) -> Option<&str> {
        match self {
            RowState::Loading => None,
            RowState::Ready(row) if row.is_empty() => Some(EMPTY_ROW_MESSAGE),
            RowState::Ready(_) => None,
            RowState::Failed { message } => Some(message),
        }
    }
}

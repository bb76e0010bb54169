use std::{fmt, sync::Arc};

use crate::movie::MovieRecord;

/// Badge rendered above the hero title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum HeroBadge {
    Film,
    Series,
}

impl HeroBadge {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroBadge::Film => "FILM",
            HeroBadge::Series => "SERIES",
        }
    }
}

impl fmt::Display for HeroBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display model for the top banner.
///
/// Derived fresh from a record every time it becomes the hero; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeroModel {
    pub record: Arc<MovieRecord>,
    pub badge: HeroBadge,
    /// Every title word but the last, with a trailing space. Whole title when
    /// it is a single word.
    pub title_lead: String,
    /// Last title word; empty for single-word titles.
    pub title_highlight: String,
    pub period: String,
    pub rating: String,
    pub votes: String,
    /// Enhanced poster URL. `None` leaves the current background in place.
    pub background: Option<String>,
}

impl HeroModel {
    pub fn show_highlight(&self) -> bool {
        !self.title_highlight.is_empty()
    }

    /// Full title as rendered (lead + highlight).
    pub fn display_title(&self) -> String {
        format!("{}{}", self.title_lead, self.title_highlight)
    }
}

use std::fmt;

/// Free-text query used to look up one movie.
///
/// Terms are not unique across rows; two rows may both list `"marvel"`. The
/// [`cache_key`](SearchTerm::cache_key) is what makes those lookups collapse
/// into one remote resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> Self {
        Self(term.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lookup-cache key: trimmed, internal whitespace collapsed, lowercased.
    pub fn cache_key(&self) -> String {
        self.0
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SearchTerm {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

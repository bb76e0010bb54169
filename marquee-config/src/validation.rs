use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::models::CatalogConfig;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("row_cap must be at least 1")]
    ZeroRowCap,
    #[error("row #{index} has an empty id")]
    EmptyRowId { index: usize },
    #[error("row id '{id}' is configured more than once")]
    DuplicateRowId { id: String },
    #[error("hero primary search term is empty")]
    EmptyHeroTerm,
    #[error("invalid catalog base URL '{url}'")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn apply_guard_rails(
    config: &CatalogConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.row_cap == 0 {
        return Err(ConfigGuardRailError::ZeroRowCap);
    }

    Url::parse(&config.api.base_url).map_err(|source| {
        ConfigGuardRailError::InvalidBaseUrl {
            url: config.api.base_url.clone(),
            source,
        }
    })?;

    if config.hero.primary.is_blank() {
        return Err(ConfigGuardRailError::EmptyHeroTerm);
    }

    validate_rows(config, &mut warnings)?;

    if config.api.api_key.trim().is_empty() {
        warnings.push_with_hint(
            "OMDB_API_KEY not configured; every lookup will be rejected",
            "Set OMDB_API_KEY or api.api_key in the config file",
        );
    }

    if config.hero.primary.cache_key() == config.hero.fallback.cache_key() {
        warnings.push(
            "hero fallback is the same term as the primary; a failed primary will not be retried with anything else",
        );
    }

    Ok(warnings)
}

fn validate_rows(
    config: &CatalogConfig,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    let mut seen = HashSet::new();

    for (index, row) in config.rows.iter().enumerate() {
        let id = row.id.as_str().trim();
        if id.is_empty() {
            return Err(ConfigGuardRailError::EmptyRowId { index });
        }
        if !seen.insert(id) {
            return Err(ConfigGuardRailError::DuplicateRowId { id: id.to_string() });
        }

        if row.searches.is_empty() {
            warnings.push(format!("row '{id}' has no search terms and will always be empty"));
        } else if row.searches.len() > config.row_cap {
            warnings.push_with_hint(
                format!(
                    "row '{id}' lists {} search terms but row_cap is {}",
                    row.searches.len(),
                    config.row_cap
                ),
                "Terms past the cap are only used when earlier ones fail to resolve",
            );
        }
    }

    Ok(())
}
